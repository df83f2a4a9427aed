//! App builder - constructs and runs the vuewrap application

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
	Router,
	http::{HeaderValue, Method, header},
};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::prelude::*;
use vuewrap_core::access::{AccessPolicy, CapabilityPolicy};
pub use vuewrap_core::app::{App, AppOpts, AppState, VERSION};
use vuewrap_core::menu::{MenuItem, default_menu};
use vuewrap_core::routes;
use vuewrap_core::settings::{FieldRegistry, SettingsService};
use vuewrap_core::shell::ShellConfig;
use vuewrap_types::auth::AuthCtx;
use vuewrap_types::option_adapter::OptionAdapter;

/// Type alias for extra field registration callbacks
type FieldRegistrar = Box<dyn FnOnce(&mut FieldRegistry) -> VwResult<()> + Send>;

pub struct AppBuilder {
	opts: AppOpts,
	shell: ShellConfig,
	menu: Vec<MenuItem>,
	option_adapter: Option<Arc<dyn OptionAdapter>>,
	access: Arc<dyn AccessPolicy>,
	api_tokens: HashMap<Box<str>, AuthCtx>,
	stock_fields: bool,
	field_registrars: Vec<FieldRegistrar>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// A subscriber may already be installed by the embedding program or another test
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppOpts::default(),
			shell: ShellConfig::default(),
			menu: default_menu(),
			option_adapter: None,
			access: Arc::new(CapabilityPolicy::default()),
			api_tokens: HashMap::new(),
			stock_fields: true,
			field_registrars: Vec::new(),
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	pub fn cors_origins(
		&mut self,
		origins: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> &mut Self {
		self.opts.cors_origins = origins.into_iter().map(Into::into).collect();
		self
	}

	pub fn shell(&mut self, shell: ShellConfig) -> &mut Self {
		self.shell = shell;
		self
	}

	pub fn menu(&mut self, menu: Vec<MenuItem>) -> &mut Self {
		self.menu = menu;
		self
	}

	// Access
	pub fn access_policy(&mut self, access: Arc<dyn AccessPolicy>) -> &mut Self {
		self.access = access;
		self
	}

	/// Accept `Authorization: Bearer <token>` as the given identity
	pub fn api_token(&mut self, token: impl Into<Box<str>>, auth: AuthCtx) -> &mut Self {
		self.api_tokens.insert(token.into(), auth);
		self
	}

	// Fields
	/// Skip the stock field set; only fields from `register_fields` are served
	pub fn stock_fields(&mut self, enabled: bool) -> &mut Self {
		self.stock_fields = enabled;
		self
	}

	pub fn register_fields<F>(&mut self, f: F) -> &mut Self
	where
		F: FnOnce(&mut FieldRegistry) -> VwResult<()> + Send + 'static,
	{
		self.field_registrars.push(Box::new(f));
		self
	}

	// Adapters
	pub fn option_adapter(&mut self, option_adapter: Arc<dyn OptionAdapter>) -> &mut Self {
		self.option_adapter = Some(option_adapter);
		self
	}

	/// Assemble the application state without serving it
	pub fn build(self) -> VwResult<App> {
		let Some(option_adapter) = self.option_adapter else {
			error!("FATAL: No option adapter configured");
			return Err(Error::ConfigError("No option adapter configured".into()));
		};
		let shell = self.shell.validate().inspect_err(|err| error!("FATAL: {}", err))?;

		let mut field_registry = FieldRegistry::new();
		if self.stock_fields {
			vuewrap_core::register_fields(&mut field_registry)?;
		}
		for registrar in self.field_registrars {
			registrar(&mut field_registry)?;
		}
		info!("Registered {} custom fields", field_registry.len());

		let field_schema = Arc::new(field_registry.freeze());
		let settings = Arc::new(SettingsService::new(
			field_schema.clone(),
			shell.option_name(),
			option_adapter,
		));
		info!("Settings stored in option '{}'", settings.option_name());

		Ok(Arc::new(AppState {
			opts: self.opts,
			shell,
			menu: self.menu,
			access: self.access,
			settings,
			field_schema,
			api_tokens: self.api_tokens,
		}))
	}

	pub async fn run(self) -> VwResult<()> {
		info!("vuewrap V{}", VERSION);

		let app = self.build()?;
		let router = router(&app)?;

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on HTTP {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Full HTTP stack: API routes plus tracing and CORS layers
pub fn router(app: &App) -> VwResult<Router> {
	let router = routes::init(app.clone()).layer(TraceLayer::new_for_http());

	if app.opts.cors_origins.is_empty() {
		return Ok(router);
	}

	let origins = app
		.opts
		.cors_origins
		.iter()
		.map(|origin| {
			HeaderValue::from_str(origin)
				.map_err(|_| Error::ConfigError(format!("Invalid CORS origin: {}", origin)))
		})
		.collect::<VwResult<Vec<_>>>()?;

	let cors = CorsLayer::new()
		.allow_origin(AllowOrigin::list(origins))
		.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
		.allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

	Ok(router.layer(cors))
}

// vim: ts=4
