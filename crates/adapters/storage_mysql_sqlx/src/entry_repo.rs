//! `MySQL` implementation of [`EntryRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySqlPool, Row};

use jotter_app::ports::EntryRepository;
use jotter_domain::entry::Entry;
use jotter_domain::error::JotterError;
use jotter_domain::id::EntryId;
use jotter_domain::time::now;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Entry);

impl<'r> FromRow<'r, MySqlRow> for Wrapper {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Entry {
            id: EntryId::from_raw(row.try_get("id")?),
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
            deleted_at: row.try_get::<Option<DateTime<Utc>>, _>("deleted_at")?,
            title: row.try_get("title")?,
        }))
    }
}

const SELECT_ALL: &str = r"
    SELECT id, created_at, updated_at, deleted_at, title
    FROM entries
    WHERE deleted_at IS NULL
    ORDER BY id
";

const SELECT_BY_ID: &str = r"
    SELECT id, created_at, updated_at, deleted_at, title
    FROM entries
    WHERE id = ? AND deleted_at IS NULL
";

const INSERT: &str = "INSERT INTO entries (created_at, updated_at, title) VALUES (?, ?, ?)";

const UPDATE_TITLE: &str =
    "UPDATE entries SET title = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL";

const SOFT_DELETE: &str =
    "UPDATE entries SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL";

/// `MySQL`-backed entry repository.
pub struct MySqlEntryRepository {
    pool: MySqlPool,
}

impl MySqlEntryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect to the server at `database_url`, run migrations and wrap the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, the server is
    /// unreachable or migrations fail.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        crate::pool::open(database_url).await.map(Self::new)
    }
}

impl EntryRepository for MySqlEntryRepository {
    fn list(&self) -> impl Future<Output = Result<Vec<Entry>, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: EntryId,
    ) -> impl Future<Output = Result<Option<Entry>, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn insert(&self, title: String) -> impl Future<Output = Result<EntryId, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = now();
            let result = sqlx::query(INSERT)
                .bind(ts)
                .bind(ts)
                .bind(title)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let raw = i64::try_from(result.last_insert_id()).map_err(StorageError::from)?;
            Ok(EntryId::from_raw(raw))
        }
    }

    fn update_title(
        &self,
        id: EntryId,
        title: String,
    ) -> impl Future<Output = Result<(), JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_TITLE)
                .bind(title)
                .bind(now())
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn soft_delete(&self, id: EntryId) -> impl Future<Output = Result<(), JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(SOFT_DELETE)
                .bind(now())
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
