//! App state type

use std::collections::HashMap;
use std::sync::Arc;

use vuewrap_types::auth::AuthCtx;

use crate::access::AccessPolicy;
use crate::menu::MenuItem;
use crate::settings::{FieldSchema, SettingsService};
use crate::shell::ShellConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppOpts,
	pub shell: ShellConfig,
	pub menu: Vec<MenuItem>,

	pub access: Arc<dyn AccessPolicy>,

	// Settings subsystem
	pub settings: Arc<SettingsService>,
	pub field_schema: Arc<FieldSchema>,

	/// Bearer tokens accepted by the stock authentication middleware
	pub api_tokens: HashMap<Box<str>, AuthCtx>,
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppOpts {
	pub listen: Box<str>,
	/// Allowed CORS origins; empty means same-origin only
	pub cors_origins: Box<[Box<str>]>,
}

impl Default for AppOpts {
	fn default() -> Self {
		Self { listen: "127.0.0.1:8080".into(), cors_origins: Box::new([]) }
	}
}

// vim: ts=4
