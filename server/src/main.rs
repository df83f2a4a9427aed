//! Standalone vuewrap server
//!
//! Reads its own options from `VUEWRAP_*` process variables and the shell
//! configuration from the `.env` file next to the client build.

use std::{env, path::PathBuf, sync::Arc};

use tracing::{error, info, warn};
use vuewrap::auth::{AuthCtx, MANAGE_OPTIONS};
use vuewrap::error::VwResult;
use vuewrap::shell::ShellConfig;
use vuewrap::AppBuilder;
use vuewrap_option_adapter_sqlite::OptionAdapterSqlite;

/// Process variable prefixes allowed to override the `.env` file
const ENV_PREFIXES: &[&str] = &["VUE_APP_"];

pub struct Config {
	pub listen: String,
	pub db_dir: PathBuf,
	pub env_file: PathBuf,
	pub admin_token: Option<String>,
	pub cors_origins: Vec<String>,
}

impl Config {
	fn from_env() -> Self {
		Config {
			listen: env::var("VUEWRAP_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
			db_dir: PathBuf::from(env::var("VUEWRAP_DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			env_file: PathBuf::from(
				env::var("VUEWRAP_ENV_FILE").unwrap_or_else(|_| "./.env".to_string()),
			),
			admin_token: env::var("VUEWRAP_ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
			cors_origins: env::var("VUEWRAP_CORS_ORIGINS")
				.map(|s| {
					s.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
				})
				.unwrap_or_default(),
		}
	}
}

#[tokio::main]
async fn main() -> VwResult<()> {
	let config = Config::from_env();
	let mut app = AppBuilder::new();

	let env = vuewrap::env::Env::load(&config.env_file, ENV_PREFIXES).await?;
	let shell = ShellConfig::from_env(&env).inspect_err(|err| error!("FATAL: {}", err))?;
	info!(
		"Shell: frontend={} backend={} menu_slug={}",
		shell.enable_frontend, shell.enable_backend, shell.menu_slug
	);

	let option_adapter = Arc::new(OptionAdapterSqlite::new(&config.db_dir).await?);

	app.listen(config.listen)
		.cors_origins(config.cors_origins)
		.shell(shell)
		.option_adapter(option_adapter);

	if let Some(token) = config.admin_token {
		app.api_token(token, AuthCtx::new("admin", [MANAGE_OPTIONS]));
	} else {
		warn!("VUEWRAP_ADMIN_TOKEN is not set, the settings API will reject every request");
	}

	app.run().await
}

// vim: ts=4
