//! Option store adapter
//!
//! The host application owns persistence. vuewrap only needs a key-value
//! slot addressed by an option name, holding a JSON-compatible value.
//! There are no transactions and no version checks: the last write wins.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait OptionAdapter: Debug + Send + Sync {
	/// Load the raw value stored under `name`.
	///
	/// Returns `Ok(None)` when nothing is stored. Values that cannot be decoded
	/// should also be reported as `None`; callers repair them with defaults.
	async fn read_option(&self, name: &str) -> VwResult<Option<serde_json::Value>>;

	/// Store `value` under `name`, replacing any previous value.
	async fn write_option(&self, name: &str, value: &serde_json::Value) -> VwResult<()>;
}

// vim: ts=4
