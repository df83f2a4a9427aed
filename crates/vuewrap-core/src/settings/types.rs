//! Field schema types
//!
//! A field schema is built once at startup through a mutable [`FieldRegistry`]
//! and then frozen into an immutable, ordered [`FieldSchema`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::prelude::*;

/// Declared type of a field. Decides how `sanitize` coerces incoming values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	String,
	Boolean,
	Integer,
	/// Any other value shape; passed through unchanged
	Json,
}

/// Field value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - plain JSON on the wire and in storage
pub enum FieldValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
	Json(serde_json::Value),
}

impl FieldValue {
	/// Check whether this value is a valid instance of `typ`
	pub fn matches_type(&self, typ: FieldType) -> bool {
		matches!(
			(self, typ),
			(FieldValue::String(_), FieldType::String)
				| (FieldValue::Int(_), FieldType::Integer)
				| (FieldValue::Bool(_), FieldType::Boolean)
				| (_, FieldType::Json)
		)
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			FieldValue::String(_) => "string",
			FieldValue::Int(_) => "integer",
			FieldValue::Bool(_) => "boolean",
			FieldValue::Json(_) => "json",
		}
	}

	/// Convert an arbitrary JSON value into the matching variant
	pub fn from_json(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Bool(b) => FieldValue::Bool(b),
			serde_json::Value::String(s) => FieldValue::String(s),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => FieldValue::Int(i),
				None => FieldValue::Json(serde_json::Value::Number(n)),
			},
			other => FieldValue::Json(other),
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FieldValue::Bool(b) => serde_json::Value::Bool(*b),
			FieldValue::Int(i) => serde_json::Value::from(*i),
			FieldValue::String(s) => serde_json::Value::String(s.clone()),
			FieldValue::Json(j) => j.clone(),
		}
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Bool(value)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		FieldValue::Int(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::String(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::String(value)
	}
}

/// Materialized mapping of field name to current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsRecord(BTreeMap<String, FieldValue>);

impl SettingsRecord {
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Interpret a raw stored value as a record.
	///
	/// Returns `None` for anything that is not a JSON object.
	pub fn from_json(value: &serde_json::Value) -> Option<Self> {
		let map = value.as_object()?;
		Some(Self(
			map.iter().map(|(k, v)| (k.clone(), FieldValue::from_json(v.clone()))).collect(),
		))
	}

	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.0.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
		self.0.insert(name.into(), value)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(String, FieldValue)> for SettingsRecord {
	fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Field definition - name, type and default of one recognized setting
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
	pub name: String,
	pub description: Option<String>,
	pub typ: FieldType,
	pub default: FieldValue,
}

impl FieldDefinition {
	/// Create a builder for constructing a FieldDefinition
	pub fn builder(name: impl Into<String>) -> FieldDefinitionBuilder {
		FieldDefinitionBuilder::new(name)
	}
}

/// Builder for FieldDefinition with fluent API
pub struct FieldDefinitionBuilder {
	name: String,
	description: Option<String>,
	typ: FieldType,
	default: Option<FieldValue>,
}

impl FieldDefinitionBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), description: None, typ: FieldType::String, default: None }
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the declared type (defaults to String)
	pub fn field_type(mut self, typ: FieldType) -> Self {
		self.typ = typ;
		self
	}

	/// Set the default value (required)
	pub fn default(mut self, value: impl Into<FieldValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	pub fn build(self) -> VwResult<FieldDefinition> {
		if self.name.is_empty() {
			return Err(Error::ConfigError("Field name must not be empty".into()));
		}
		let default = self.default.ok_or_else(|| {
			Error::ConfigError(format!("Field '{}' has no default value", self.name))
		})?;
		if !default.matches_type(self.typ) {
			return Err(Error::ConfigError(format!(
				"Default of field '{}' is {}, declared type is {:?}",
				self.name,
				default.type_name(),
				self.typ
			)));
		}

		Ok(FieldDefinition {
			name: self.name,
			description: self.description,
			typ: self.typ,
			default,
		})
	}
}

/// Mutable registry used during app initialization
#[derive(Debug, Default)]
pub struct FieldRegistry {
	definitions: Vec<FieldDefinition>,
	names: HashSet<String>,
}

impl FieldRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new field definition
	pub fn register(&mut self, def: FieldDefinition) -> VwResult<()> {
		if !self.names.insert(def.name.clone()) {
			return Err(Error::ConfigError(format!("Field '{}' is already registered", def.name)));
		}

		debug!("Registering field: {}", def.name);
		self.definitions.push(def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FieldSchema {
		info!("Freezing field schema with {} definitions", self.definitions.len());
		FieldSchema { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable, ordered field schema stored in AppState
#[derive(Debug)]
pub struct FieldSchema {
	definitions: Vec<FieldDefinition>,
}

impl FieldSchema {
	/// One entry per definition, holding its default
	pub fn defaults(&self) -> SettingsRecord {
		self.definitions.iter().map(|def| (def.name.clone(), def.default.clone())).collect()
	}

	/// Get a field definition by name
	pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
		self.definitions.iter().find(|def| def.name == name)
	}

	/// Definitions in registration order
	pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
		self.definitions.iter()
	}

	/// Inject defaults for every field missing from `record`.
	///
	/// Returns the number of injected fields. Keys unknown to the schema are
	/// left in place.
	pub fn backfill(&self, record: &mut SettingsRecord) -> usize {
		let mut injected = 0;
		for def in &self.definitions {
			if !record.contains(&def.name) {
				record.insert(def.name.clone(), def.default.clone());
				injected += 1;
			}
		}
		injected
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
