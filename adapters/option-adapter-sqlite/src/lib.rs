//! SQLite option store
//!
//! Every option is one row of the `options` table, its value kept as JSON text.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use vuewrap_types::{option_adapter::OptionAdapter, prelude::*};

mod option;
mod schema;

#[derive(Debug)]
pub struct OptionAdapterSqlite {
	db: SqlitePool,
}

impl OptionAdapterSqlite {
	/// Open (or create) the database in `dir`
	pub async fn new(dir: impl AsRef<Path>) -> VwResult<Self> {
		tokio::fs::create_dir_all(dir.as_ref()).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.as_ref().join("options.db"))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		info!("Option store opened in {}", dir.as_ref().display());
		Ok(Self { db })
	}
}

#[async_trait]
impl OptionAdapter for OptionAdapterSqlite {
	async fn read_option(&self, name: &str) -> VwResult<Option<serde_json::Value>> {
		option::read(&self.db, name).await
	}

	async fn write_option(&self, name: &str, value: &serde_json::Value) -> VwResult<()> {
		option::write(&self.db, name, value).await
	}
}

// vim: ts=4
