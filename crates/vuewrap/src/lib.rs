//! vuewrap hosts a single-page client application behind a small server.
//!
//! # Features
//!
//! - Shell configuration from a `.env` file (which surfaces are enabled, menu slug, REST root)
//! - Admin menu with one page per client route
//! - Typed custom fields kept in a single option slot
//!     - missing fields are backfilled with defaults on every read
//!     - patch (`POST /settings`) and sanitizing replace (`POST /custom-fields`)
//! - Pluggable option store and access policy

// Re-export shared types and adapter traits from vuewrap-types
pub use vuewrap_types::auth;
pub use vuewrap_types::error;
pub use vuewrap_types::option_adapter;

// Core re-exports
pub use vuewrap_core::access;
pub use vuewrap_core::env;
pub use vuewrap_core::menu;
pub use vuewrap_core::settings;
pub use vuewrap_core::shell;

// Local modules
pub mod app;
pub mod prelude;

pub use app::{AppBuilder, router};

// vim: ts=4
