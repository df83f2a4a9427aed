//! In-memory option adapter for tests
//!
//! Counts reads and writes so tests can assert how often the store was touched.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use vuewrap_types::error::{Error, VwResult};
use vuewrap_types::option_adapter::OptionAdapter;

#[derive(Debug, Default)]
pub struct MemoryOptionAdapter {
	options: Mutex<HashMap<String, serde_json::Value>>,
	reads: AtomicUsize,
	writes: AtomicUsize,
	fail: std::sync::atomic::AtomicBool,
}

impl MemoryOptionAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pre-populate a slot without counting it as a write
	pub fn with_option(self, name: &str, value: serde_json::Value) -> Self {
		self.options.lock().insert(name.to_string(), value);
		self
	}

	/// Peek at a slot without counting it as a read
	pub fn stored(&self, name: &str) -> Option<serde_json::Value> {
		self.options.lock().get(name).cloned()
	}

	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	/// Make every subsequent call fail with a database error
	pub fn set_failing(&self, fail: bool) {
		self.fail.store(fail, Ordering::SeqCst);
	}
}

#[async_trait]
impl OptionAdapter for MemoryOptionAdapter {
	async fn read_option(&self, name: &str) -> VwResult<Option<serde_json::Value>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		if self.fail.load(Ordering::SeqCst) {
			return Err(Error::DbError);
		}
		Ok(self.options.lock().get(name).cloned())
	}

	async fn write_option(&self, name: &str, value: &serde_json::Value) -> VwResult<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		if self.fail.load(Ordering::SeqCst) {
			return Err(Error::DbError);
		}
		self.options.lock().insert(name.to_string(), value.clone());
		Ok(())
	}
}

// vim: ts=4
