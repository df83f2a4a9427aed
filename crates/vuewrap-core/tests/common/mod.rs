//! Common test utilities and helpers
//!
//! Shared by the settings service and HTTP API integration tests.

#![allow(dead_code)]

pub mod adapters;
pub mod fixtures;

pub use adapters::*;
pub use fixtures::*;

// vim: ts=4
