#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use vuewrap::error::VwResult;
use vuewrap::option_adapter::OptionAdapter;

/// Option store kept in memory
#[derive(Debug, Default)]
pub struct MemoryOptionAdapter {
	options: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryOptionAdapter {
	pub fn stored(&self, name: &str) -> Option<serde_json::Value> {
		self.options.lock().get(name).cloned()
	}
}

#[async_trait]
impl OptionAdapter for MemoryOptionAdapter {
	async fn read_option(&self, name: &str) -> VwResult<Option<serde_json::Value>> {
		Ok(self.options.lock().get(name).cloned())
	}

	async fn write_option(&self, name: &str, value: &serde_json::Value) -> VwResult<()> {
		self.options.lock().insert(name.to_string(), value.clone());
		Ok(())
	}
}

// vim: ts=4
