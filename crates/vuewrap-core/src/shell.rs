//! Shell configuration
//!
//! Flags that decide where the client application is mounted, plus the
//! bootstrap payload handed to the client on startup.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::env::Env;
use crate::menu::{MenuItem, menu_slugs};
use crate::prelude::*;

pub const DEFAULT_MENU_SLUG: &str = "vue-wp-app";
pub const DEFAULT_REST_ROOT: &str = "/wp-json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
	/// Mount the client on the public site
	pub enable_frontend: bool,
	/// Mount the client in the admin area
	pub enable_backend: bool,
	/// Load the client on every admin page, not only the app's own pages
	pub enable_backend_global: bool,
	pub dev_mode: bool,
	pub debug_mode: bool,
	pub menu_slug: Box<str>,
	/// Path prefix of the REST API, without trailing slash
	pub rest_root: Box<str>,
}

impl Default for ShellConfig {
	fn default() -> Self {
		Self {
			enable_frontend: false,
			enable_backend: true,
			enable_backend_global: true,
			dev_mode: true,
			debug_mode: false,
			menu_slug: DEFAULT_MENU_SLUG.into(),
			rest_root: DEFAULT_REST_ROOT.into(),
		}
	}
}

impl ShellConfig {
	pub fn from_env(env: &Env) -> VwResult<Self> {
		let defaults = Self::default();

		let menu_slug = env.get_str("VUE_APP_MENU_SLUG", &defaults.menu_slug).trim();

		let rest_root = env.get_str("VUE_APP_REST_ROOT", &defaults.rest_root).trim().trim_matches('/');
		let rest_root = if rest_root.is_empty() { String::new() } else { format!("/{}", rest_root) };

		Self {
			enable_frontend: env.get_bool("VUE_APP_ENABLE_FRONTEND", defaults.enable_frontend),
			enable_backend: env.get_bool("VUE_APP_ENABLE_BACKEND", defaults.enable_backend),
			enable_backend_global: env
				.get_bool("VUE_APP_ENABLE_BACKEND_GLOBAL", defaults.enable_backend_global),
			dev_mode: env.get_bool("VUE_APP_DEV_MODE", defaults.dev_mode),
			debug_mode: env.get_bool("VUE_APP_DEBUG_MODE", defaults.debug_mode),
			menu_slug: menu_slug.into(),
			rest_root: rest_root.into(),
		}
		.validate()
	}

	/// Check that the menu slug and REST root form a usable route prefix.
	/// The slug also prefixes the option name.
	pub fn validate(self) -> VwResult<Self> {
		let slug = &self.menu_slug;
		if slug.is_empty() || !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
		{
			return Err(Error::ConfigError(format!("Invalid menu slug: {:?}", slug)));
		}

		let root = &self.rest_root;
		if !root.is_empty()
			&& (!root.starts_with('/')
				|| root.ends_with('/')
				|| !root.chars().all(|c| c.is_ascii_graphic() && !matches!(c, '{' | '}' | '*')))
		{
			return Err(Error::ConfigError(format!("Invalid REST root: {:?}", root)));
		}
		Ok(self)
	}

	/// The API is only served when the client is mounted somewhere
	pub fn api_enabled(&self) -> bool {
		self.enable_backend || self.enable_frontend
	}

	/// REST namespace, e.g. `/wp-json/vue-wp-app/v1`
	pub fn namespace(&self) -> String {
		format!("{}/{}/v1", self.rest_root, self.menu_slug)
	}

	/// Option slot holding the settings record
	pub fn option_name(&self) -> String {
		format!("{}_custom_fields", self.menu_slug)
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
	pub title: String,
	pub page_slug: String,
	pub route: String,
	pub icon: String,
}

/// Client bootstrap payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellBootstrap {
	pub enable_frontend: bool,
	pub enable_backend: bool,
	pub enable_backend_global: bool,
	pub dev_mode: bool,
	pub debug_mode: bool,
	pub menu_slug: String,
	pub api_url: String,
	pub menu: Vec<MenuEntry>,
}

impl ShellBootstrap {
	pub fn new(config: &ShellConfig, menu: &[MenuItem]) -> Self {
		Self {
			enable_frontend: config.enable_frontend,
			enable_backend: config.enable_backend,
			enable_backend_global: config.enable_backend_global,
			dev_mode: config.dev_mode,
			debug_mode: config.debug_mode,
			menu_slug: config.menu_slug.to_string(),
			api_url: config.namespace(),
			menu: menu
				.iter()
				.zip(menu_slugs(&config.menu_slug, menu))
				.map(|(item, page_slug)| MenuEntry {
					title: item.title.clone(),
					page_slug,
					route: item.route.clone(),
					icon: item.icon.clone(),
				})
				.collect(),
		}
	}
}

/// GET /shell - Client bootstrap configuration
pub async fn get_shell(State(app): State<App>) -> Json<ShellBootstrap> {
	Json(ShellBootstrap::new(&app.shell, &app.menu))
}


// vim: ts=4
