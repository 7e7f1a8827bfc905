//! `SQLite` implementation of [`EntryRepository`].

use std::future::Future;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use jotter_app::ports::EntryRepository;
use jotter_domain::entry::Entry;
use jotter_domain::error::JotterError;
use jotter_domain::id::EntryId;
use jotter_domain::time::{Timestamp, now};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Entry);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Entry> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        let deleted_at: Option<String> = row.try_get("deleted_at")?;
        let title: String = row.try_get("title")?;

        Ok(Self(Entry {
            id: EntryId::from_raw(id),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
            deleted_at: deleted_at.as_deref().map(parse_timestamp).transpose()?,
            title,
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

/// `SQLite`-backed entry repository.
pub struct SqliteEntryRepository {
    pool: SqlitePool,
}

impl SqliteEntryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, run migrations and wrap the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        crate::pool::open(database_url).await.map(Self::new)
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl EntryRepository for SqliteEntryRepository {
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

            Ok(Wrapper::maybe(row))
        }
    }

    fn insert(&self, title: String) -> impl Future<Output = Result<EntryId, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = now().to_rfc3339();
            let result = sqlx::query(INSERT)
                .bind(&ts)
                .bind(&ts)
                .bind(title)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(EntryId::from_raw(result.last_insert_rowid()))
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
                .bind(now().to_rfc3339())
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
                .bind(now().to_rfc3339())
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> SqliteEntryRepository {
        SqliteEntryRepository::connect("sqlite::memory:").await.unwrap()
    }

    async fn count(repo: &SqliteEntryRepository, sql: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(sql).fetch_one(&repo.pool).await.unwrap();
        n
    }

    async fn total_rows(repo: &SqliteEntryRepository) -> i64 {
        count(repo, "SELECT COUNT(*) FROM entries").await
    }

    async fn live_rows(repo: &SqliteEntryRepository) -> i64 {
        count(repo, "SELECT COUNT(*) FROM entries WHERE deleted_at IS NULL").await
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_entry() {
        let repo = setup().await;

        let id = repo.insert("Living notes".to_string()).await.unwrap();
        assert_eq!(id, EntryId::from_raw(1));

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title, "Living notes");
        assert_eq!(fetched.created_at, fetched.updated_at);
        assert!(fetched.deleted_at.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_entry_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(EntryId::from_raw(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_live_entries_in_id_order() {
        let repo = setup().await;
        repo.insert("first".to_string()).await.unwrap();
        repo.insert("second".to_string()).await.unwrap();

        let all = repo.list().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[tokio::test]
    async fn should_update_title_and_keep_row_count() {
        let repo = setup().await;
        let id = repo.insert("before".to_string()).await.unwrap();
        let original = repo.get_by_id(id).await.unwrap().unwrap();

        repo.update_title(id, "after".to_string()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "after");
        assert_eq!(fetched.created_at, original.created_at);
        assert!(fetched.updated_at >= original.updated_at);
        assert_eq!(total_rows(&repo).await, 1);
    }

    #[tokio::test]
    async fn should_hide_soft_deleted_entry_but_keep_row() {
        let repo = setup().await;
        let id = repo.insert("temporary".to_string()).await.unwrap();

        repo.soft_delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(total_rows(&repo).await, 1);
        assert_eq!(live_rows(&repo).await, 0);
    }

    #[tokio::test]
    async fn should_keep_first_deletion_timestamp_when_deleted_twice() {
        let repo = setup().await;
        let id = repo.insert("twice".to_string()).await.unwrap();

        repo.soft_delete(id).await.unwrap();
        let (first,): (String,) = sqlx::query_as("SELECT deleted_at FROM entries WHERE id = ?")
            .bind(id.as_raw())
            .fetch_one(&repo.pool)
            .await
            .unwrap();

        repo.soft_delete(id).await.unwrap();
        let (second,): (String,) = sqlx::query_as("SELECT deleted_at FROM entries WHERE id = ?")
            .bind(id.as_raw())
            .fetch_one(&repo.pool)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_not_update_soft_deleted_entry() {
        let repo = setup().await;
        let id = repo.insert("frozen".to_string()).await.unwrap();
        repo.soft_delete(id).await.unwrap();

        repo.update_title(id, "thawed".to_string()).await.unwrap();

        let (title,): (String,) = sqlx::query_as("SELECT title FROM entries WHERE id = ?")
            .bind(id.as_raw())
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(title, "frozen");
    }

    #[tokio::test]
    async fn should_never_reuse_ids_after_soft_delete() {
        let repo = setup().await;
        repo.insert("one".to_string()).await.unwrap();
        let second = repo.insert("two".to_string()).await.unwrap();
        repo.soft_delete(second).await.unwrap();

        let third = repo.insert("three".to_string()).await.unwrap();

        assert_eq!(third, EntryId::from_raw(3));
    }

    #[tokio::test]
    async fn should_store_empty_title() {
        let repo = setup().await;
        let id = repo.insert(String::new()).await.unwrap();
        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(fetched.title.is_empty());
    }
}
