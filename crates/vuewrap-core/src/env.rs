//! Environment configuration loader
//!
//! Reads `KEY=VALUE` pairs from a `.env` style file and overlays the process
//! environment on top. File values `true` and `false` (any case) are booleans;
//! everything else is kept as a string.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
	Bool(bool),
	String(String),
}

impl EnvValue {
	/// Interpret the value as a flag. Strings accept the usual spellings.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			EnvValue::Bool(b) => Some(*b),
			EnvValue::String(s) => parse_bool(s),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			EnvValue::Bool(true) => "true",
			EnvValue::Bool(false) => "false",
			EnvValue::String(s) => s,
		}
	}
}

fn parse_bool(s: &str) -> Option<bool> {
	match s.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" | "" => Some(false),
		_ => None,
	}
}

fn unquote(value: &str) -> &str {
	let bytes = value.as_bytes();
	if bytes.len() >= 2 {
		let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
		if (first == b'"' || first == b'\'') && first == last {
			return &value[1..value.len() - 1];
		}
	}
	value
}

/// Parse the contents of an env file
pub fn parse_env_file(content: &str) -> VwResult<HashMap<String, EnvValue>> {
	let line_re = Regex::new(r"^\s*([\w.]+)\s*=\s*(.*)$")
		.map_err(|e| Error::Internal(format!("env line regex compilation failed: {}", e)))?;

	let mut vars = HashMap::new();
	for line in content.split(['\r', '\n']) {
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		let Some(caps) = line_re.captures(line) else {
			debug!("Skipping unparsable env line: {:?}", line);
			continue;
		};
		let name = caps[1].to_string();
		let raw = caps.get(2).map_or("", |m| m.as_str()).trim_end();
		let value = unquote(raw);

		let value = if value.eq_ignore_ascii_case("true") {
			EnvValue::Bool(true)
		} else if value.eq_ignore_ascii_case("false") {
			EnvValue::Bool(false)
		} else {
			EnvValue::String(value.to_string())
		};
		vars.insert(name, value);
	}

	Ok(vars)
}

/// Merged configuration lookup: env file values overlaid with process variables
#[derive(Debug, Clone, Default)]
pub struct Env {
	vars: HashMap<String, EnvValue>,
}

impl Env {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build from explicit pairs (no file, no process environment)
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<EnvValue>,
	{
		Self { vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}

	/// Load `path` (if it exists) and overlay matching process variables.
	///
	/// Only keys with the given prefixes are taken from the process environment.
	pub async fn load(path: impl AsRef<Path>, prefixes: &[&str]) -> VwResult<Self> {
		let path = path.as_ref();
		let mut vars = match tokio::fs::read_to_string(path).await {
			Ok(content) => {
				let vars = parse_env_file(&content)?;
				info!("Loaded {} variable(s) from {}", vars.len(), path.display());
				vars
			}
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				debug!("No env file at {}", path.display());
				HashMap::new()
			}
			Err(err) => return Err(err.into()),
		};

		for (key, value) in std::env::vars() {
			if prefixes.iter().any(|p| key.starts_with(p)) {
				vars.insert(key, EnvValue::String(value));
			}
		}

		Ok(Self { vars })
	}

	pub fn get(&self, key: &str) -> Option<&EnvValue> {
		self.vars.get(key)
	}

	pub fn get_bool(&self, key: &str, default: bool) -> bool {
		match self.vars.get(key) {
			Some(value) => value.as_bool().unwrap_or_else(|| {
				warn!("{} is not a boolean ({:?}), using {}", key, value.as_str(), default);
				default
			}),
			None => default,
		}
	}

	pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.vars.get(key).map_or(default, EnvValue::as_str)
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}
}

impl From<bool> for EnvValue {
	fn from(value: bool) -> Self {
		EnvValue::Bool(value)
	}
}

impl From<&str> for EnvValue {
	fn from(value: &str) -> Self {
		EnvValue::String(value.to_string())
	}
}

impl From<String> for EnvValue {
	fn from(value: String) -> Self {
		EnvValue::String(value)
	}
}


// vim: ts=4
