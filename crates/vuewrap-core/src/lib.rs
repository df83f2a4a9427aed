//! Core of vuewrap.
//!
//! vuewrap hosts a single-page client application and keeps its configuration
//! on the server: a schema of typed custom fields stored in one option slot,
//! exposed through a small JSON API guarded by a host-supplied access policy.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod app;
pub mod env;
pub mod extract;
pub mod fields;
pub mod menu;
pub mod middleware;
pub mod prelude;
pub mod routes;
pub mod settings;
pub mod shell;

// Re-export commonly used types
pub use access::{AccessPolicy, CapabilityPolicy};
pub use app::{App, AppOpts, AppState};
pub use extract::{Auth, OptionsManager};
pub use shell::ShellConfig;

pub fn register_fields(registry: &mut settings::FieldRegistry) -> vuewrap_types::error::VwResult<()> {
	fields::register_fields(registry)
}

// vim: ts=4
