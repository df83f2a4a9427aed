//! Shared types, adapter traits, and core utilities for vuewrap.
//!
//! This crate contains the foundational types that are shared between the
//! core crate and the option-store adapter implementations, so that adapter
//! crates do not depend on the core crate.

pub mod auth;
pub mod error;
pub mod option_adapter;
pub mod prelude;

// vim: ts=4
