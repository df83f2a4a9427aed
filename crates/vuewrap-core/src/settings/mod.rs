//! Settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): field schema, field values and the settings record
//! - **Coerce** (`coerce.rs`): loose conversions used when sanitizing input
//! - **Service** (`service.rs`): SettingsService, repair-on-read and the two write paths
//! - **Handler** (`handler.rs`): HTTP API endpoints
//!
//! # Write paths
//!
//! The record can be written in two ways that must stay distinct:
//! - **Patch** (`POST /settings`): known keys are overwritten as given, the rest is kept
//! - **Replace** (`POST /custom-fields`): the body is sanitized into a complete,
//!   type-correct record that replaces the stored one

pub mod coerce;
pub mod handler;
pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{
	FieldDefinition, FieldDefinitionBuilder, FieldRegistry, FieldSchema, FieldType, FieldValue,
	SettingsRecord,
};

// vim: ts=4
