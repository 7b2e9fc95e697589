//! Schema migrations embedded at compile time.

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use std::collections::HashSet;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Postgres `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// Versions recorded as successfully applied.
///
/// A database that has never been migrated has no bookkeeping table and
/// yields an empty set. Every other failure is returned.
pub async fn applied_versions(pool: &PgPool) -> sqlx::Result<HashSet<i64>> {
    match sqlx::query_scalar::<_, i64>("SELECT version FROM _sqlx_migrations WHERE success = true")
        .fetch_all(pool)
        .await
    {
        Ok(versions) => Ok(versions.into_iter().collect()),
        Err(e) if is_undefined_table(&e) => Ok(HashSet::new()),
        Err(e) => Err(e),
    }
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNDEFINED_TABLE)
}
