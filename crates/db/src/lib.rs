//! Persistence layer: SQLite pool, embedded migrations, models, repositories.
//!
//! The pool handle is created once at startup and passed explicitly into
//! every repository call; there is no module-level connection state.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

/// Shared connection pool type used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Open (creating if missing) the SQLite database at `database_url`.
///
/// Foreign keys are enforced and WAL journaling is enabled; both are
/// connection-level settings in SQLite so they live here rather than in
/// the migrations.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Cheap liveness probe used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// RFC3339-UTC `now` expression shared by every INSERT/UPDATE that touches
/// a timestamp column. Matches the column defaults in the migrations so
/// all stored timestamps decode as `DateTime<Utc>`.
pub(crate) const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Render a timestamp in the same RFC3339-Z millisecond format `SQL_NOW`
/// produces. Timestamp parameters must be bound through this so that
/// text-level comparisons against stored values stay chronological.
pub(crate) fn fmt_timestamp(ts: gcrental_core::types::Timestamp) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
