//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time, so `DatabasePool` keeps a
//! multi-connection pool for concurrent reads and a single-connection pool
//! that serializes writes. Both run in WAL journal mode.
//!
//! The schema is bootstrapped in place with `CREATE TABLE IF NOT EXISTS`
//! rather than a migration framework; the catalog is a single table.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    url TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)";

/// Split read/write pool for SQLite with WAL mode.
///
/// `reader` serves concurrent SELECTs (up to 8 connections); `writer` is a
/// single connection so INSERT/UPDATE/DELETE are serialized.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the split pools against `database_url`.
    ///
    /// Creates the `services` table on the writer pool before opening the
    /// reader pool. Both pools use WAL journal mode and a 5-second busy
    /// timeout.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        sqlx::query(SCHEMA).execute(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Returns the database URL from the `SVCDIR_DB` env var, falling back to
/// `services.db` in the working directory.
pub fn default_database_url() -> String {
    std::env::var("SVCDIR_DB").unwrap_or_else(|_| "sqlite://services.db?mode=rwc".to_string())
}
