//! Schema bootstrap
//!
//! Every statement in the schema is idempotent, so this runs on each startup.

use sqlx::PgPool;
use tracing::{info, instrument};

const SCHEMA: &str = include_str!("../../migrations/0001_initial.sql");

/// Arbitrary key serializing concurrent schema bootstraps
const SCHEMA_LOCK_KEY: i64 = 0x6a6f_6b65_626f_78;

/// Create any missing tables and indexes
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&mut *tx).await?;

    tx.commit().await?;

    info!("Database schema is up to date");
    Ok(())
}
