//! Opens the `SQLite` database behind a connection string.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Open a pool on `database_url` and bring the schema up to date.
///
/// The database file is created when missing. `sqlite::memory:` gives a
/// private in-memory database shared by every connection of the pool.
pub(crate) async fn open(database_url: &str) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::debug!(url = database_url, "sqlite schema ready");

    Ok(pool)
}
