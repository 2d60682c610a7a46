//! Connection pool for the configured SQLite database.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

/// In-memory databases live and die with their connection.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if it does not exist.
/// Foreign keys are enforced on every connection. An in-memory URL gets a single
/// connection that is never closed, so every query sees the same database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_opts = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(database_url, "database pool ready");
    Ok(pool)
}
