//! Named option slots holding JSON values

use sqlx::{Row, SqlitePool};

use vuewrap_types::prelude::*;

/// Read a single option by name
///
/// A value that no longer parses as JSON reads back as unset.
pub(crate) async fn read(db: &SqlitePool, name: &str) -> VwResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM options WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| {
			serde_json::from_str(&v)
				.inspect_err(|err| warn!("Option '{}' holds invalid JSON: {}", name, err))
				.ok()
		})
	}))
}

/// Create or overwrite an option
pub(crate) async fn write(db: &SqlitePool, name: &str, value: &serde_json::Value) -> VwResult<()> {
	let value = serde_json::to_string(value)?;

	sqlx::query("INSERT OR REPLACE INTO options (name, value) VALUES (?, ?)")
		.bind(name)
		.bind(value)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
