//! Settings service - reconciles stored option values against the field schema

use std::sync::Arc;

use vuewrap_types::option_adapter::OptionAdapter;

use crate::prelude::*;

use super::coerce;
use super::types::{FieldSchema, FieldType, FieldValue, SettingsRecord};

/// Settings service - main interface for reading and writing the settings record.
///
/// The whole record lives in a single option slot. Every operation performs at
/// most one read and at most one write against the option adapter; there is no
/// locking, so concurrent writers race and the last write wins.
pub struct SettingsService {
	schema: Arc<FieldSchema>,
	option_name: Box<str>,
	store: Arc<dyn OptionAdapter>,
}

impl SettingsService {
	pub fn new(
		schema: Arc<FieldSchema>,
		option_name: impl Into<Box<str>>,
		store: Arc<dyn OptionAdapter>,
	) -> Self {
		Self { schema, option_name: option_name.into(), store }
	}

	pub fn schema(&self) -> &Arc<FieldSchema> {
		&self.schema
	}

	pub fn option_name(&self) -> &str {
		&self.option_name
	}

	/// Load the stored record and repair it in memory.
	///
	/// Returns the record and whether it differs from what is stored.
	async fn load(&self) -> VwResult<(SettingsRecord, bool)> {
		let stored = self.store.read_option(&self.option_name).await?;

		match stored.as_ref().and_then(SettingsRecord::from_json) {
			Some(mut record) => {
				let injected = self.schema.backfill(&mut record);
				if injected > 0 {
					info!(
						"Backfilled {} missing field(s) in option '{}'",
						injected, self.option_name
					);
				}
				Ok((record, injected > 0))
			}
			None => {
				if stored.is_some() {
					warn!("Option '{}' is not a record, resetting to defaults", self.option_name);
				} else {
					info!("Option '{}' is not set, initializing defaults", self.option_name);
				}
				Ok((self.schema.defaults(), true))
			}
		}
	}

	async fn save(&self, record: &SettingsRecord) -> VwResult<()> {
		self.store.write_option(&self.option_name, &record.to_json()).await
	}

	/// Get the full record, backfilling defaults for missing fields.
	///
	/// The repaired record is written back only if something was injected.
	/// Stored keys unknown to the schema are kept as they are.
	pub async fn get_all(&self) -> VwResult<SettingsRecord> {
		let (record, repaired) = self.load().await?;
		if repaired {
			self.save(&record).await?;
		}
		Ok(record)
	}

	/// Get a single value, or `fallback` if the record has no such key
	pub async fn get_one(&self, name: &str, fallback: FieldValue) -> VwResult<FieldValue> {
		let record = self.get_all().await?;
		Ok(record.get(name).cloned().unwrap_or(fallback))
	}

	/// Patch the record with the keys of `patch` that already exist in it.
	///
	/// Values are stored as given, without coercion. Unknown keys are dropped.
	/// The merged record is always written back.
	pub async fn update_many(
		&self,
		patch: &serde_json::Map<String, serde_json::Value>,
	) -> VwResult<SettingsRecord> {
		let (mut record, _) = self.load().await?;

		let mut updated = 0;
		for (name, value) in patch {
			if record.contains(name) {
				record.insert(name.clone(), FieldValue::from_json(value.clone()));
				updated += 1;
			} else {
				debug!("Ignoring unknown field '{}' in update", name);
			}
		}

		self.save(&record).await?;
		info!("Updated {} field(s) in option '{}'", updated, self.option_name);
		Ok(record)
	}

	/// Build a complete, type-correct record from arbitrary input.
	///
	/// Each schema field present in `raw` is coerced to its declared type; every
	/// other field takes its default. A `null` counts as absent. Anything that
	/// is not a JSON object yields the defaults.
	pub fn sanitize(&self, raw: &serde_json::Value) -> SettingsRecord {
		let Some(map) = raw.as_object() else {
			return self.schema.defaults();
		};

		self.schema
			.iter()
			.map(|def| {
				let value = match map.get(&def.name) {
					None | Some(serde_json::Value::Null) => def.default.clone(),
					Some(value) => match def.typ {
						FieldType::Boolean => FieldValue::Bool(coerce::to_bool(value)),
						FieldType::Integer => FieldValue::Int(coerce::to_int(value)),
						FieldType::String => FieldValue::String(coerce::to_text(value)),
						FieldType::Json => FieldValue::from_json(value.clone()),
					},
				};
				(def.name.clone(), value)
			})
			.collect()
	}

	/// Replace the stored record with the sanitized form of `raw`
	pub async fn replace(&self, raw: &serde_json::Value) -> VwResult<SettingsRecord> {
		let record = self.sanitize(raw);
		self.save(&record).await?;
		info!("Replaced option '{}' with sanitized record", self.option_name);
		Ok(record)
	}
}

// vim: ts=4
