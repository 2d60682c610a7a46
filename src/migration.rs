//! Schema DDL for the `bakeries` and `baked_goods` tables.

use crate::error::AppError;
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        bakery_id INTEGER NOT NULL REFERENCES bakeries (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_baked_goods_bakery_id ON baked_goods (bakery_id)",
];

/// Create both tables and the foreign-key index. Idempotent; run once at startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema up to date");
    Ok(())
}
