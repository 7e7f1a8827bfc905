//! Storage port — repository trait for entry persistence.

use std::future::Future;

use jotter_domain::entry::Entry;
use jotter_domain::error::JotterError;
use jotter_domain::id::EntryId;

/// Repository for persisting and querying [`Entry`] records.
///
/// Reads only ever see live rows: soft-deleted entries are invisible to
/// [`list`](Self::list) and [`get_by_id`](Self::get_by_id). Implementations
/// maintain `created_at` / `updated_at` / `deleted_at` themselves.
pub trait EntryRepository {
    /// List every live entry, ordered by ascending id.
    fn list(&self) -> impl Future<Output = Result<Vec<Entry>, JotterError>> + Send;

    /// Get a live entry by id.
    fn get_by_id(
        &self,
        id: EntryId,
    ) -> impl Future<Output = Result<Option<Entry>, JotterError>> + Send;

    /// Insert a new entry with the given title and return its assigned id.
    fn insert(&self, title: String) -> impl Future<Output = Result<EntryId, JotterError>> + Send;

    /// Overwrite the title of a live entry and bump its `updated_at`.
    fn update_title(
        &self,
        id: EntryId,
        title: String,
    ) -> impl Future<Output = Result<(), JotterError>> + Send;

    /// Mark a live entry as deleted. The row stays in storage.
    fn soft_delete(&self, id: EntryId) -> impl Future<Output = Result<(), JotterError>> + Send;
}
