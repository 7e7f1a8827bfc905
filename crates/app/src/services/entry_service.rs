//! Entry service — use-cases for managing entries.

use jotter_domain::entry::Entry;
use jotter_domain::error::JotterError;
use jotter_domain::id::EntryId;

use crate::ports::EntryRepository;

/// Application service for entry CRUD operations.
///
/// Lookups that miss never fail: they yield [`Entry::default`], the
/// zero-value entry, and mutations against a missing id are no-ops.
pub struct EntryService<R> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all live entries.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, JotterError> {
        self.repo.list().await
    }

    /// Look up an entry by id, falling back to the zero-value entry.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_entry(&self, id: EntryId) -> Result<Entry, JotterError> {
        Ok(self.repo.get_by_id(id).await?.unwrap_or_default())
    }

    /// Insert a new entry and read it back.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_entry(&self, title: String) -> Result<Entry, JotterError> {
        let id = self.repo.insert(title).await?;
        tracing::debug!(%id, "entry created");
        self.get_entry(id).await
    }

    /// Overwrite the title of an existing entry and read it back.
    ///
    /// When `id` names no live entry nothing is written and the zero-value
    /// entry is returned.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_entry(&self, id: EntryId, title: String) -> Result<Entry, JotterError> {
        let Some(existing) = self.repo.get_by_id(id).await? else {
            tracing::debug!(%id, "update skipped, entry not found");
            return Ok(Entry::default());
        };
        self.repo.update_title(existing.id, title).await?;
        self.get_entry(existing.id).await
    }

    /// Soft-delete an entry. Missing ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_entry(&self, id: EntryId) -> Result<(), JotterError> {
        match self.repo.get_by_id(id).await? {
            Some(existing) => self.repo.soft_delete(existing.id).await,
            None => {
                tracing::debug!(%id, "delete skipped, entry not found");
                Ok(())
            }
        }
    }
}
