//! # Bootstrap Schema
//!
//! Embedded schema for the invoicing tables.
//!
//! The `sqlx::migrate!()` macro embeds the SQL files from
//! `migrations/sqlite/` into the binary at compile time; they are applied
//! once at startup and tracked in `_sqlx_migrations`. There is a single
//! bootstrap file and no further migration tooling: schema evolution is out
//! of scope for this service.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded schema files from the `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies the bootstrap schema.
///
/// Idempotent: safe to run at every startup. Each file runs inside a
/// transaction and is recorded with its checksum, so an already-initialized
/// database is left untouched.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Applying bootstrap schema");

    MIGRATOR.run(pool).await?;

    info!("Schema up to date");
    Ok(())
}
