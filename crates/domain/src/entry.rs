//! Entry — the single managed record: an id, a title, and lifecycle timestamps.

use serde::Serialize;

use crate::id::EntryId;
use crate::time::{self, Timestamp};

/// A titled entry.
///
/// Serialized with PascalCase keys (`ID`, `CreatedAt`, `UpdatedAt`,
/// `DeletedAt`, `Title`) so clients of the existing wire format keep working.
///
/// [`Entry::default`] is the zero-value entry: id `0`, empty title, zero
/// timestamps and no deletion marker. Lookups that miss return it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    #[serde(rename = "ID")]
    pub id: EntryId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub title: String,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            id: EntryId::default(),
            created_at: time::zero(),
            updated_at: time::zero(),
            deleted_at: None,
            title: String::new(),
        }
    }
}

impl Entry {
    /// Create a builder for constructing an [`Entry`].
    #[must_use]
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    /// Whether the entry has been soft-deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether this is the zero-value entry rather than a stored row.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.id.is_assigned()
    }
}

/// Step-by-step builder for [`Entry`].
///
/// `created_at` and `updated_at` are both stamped with the current time.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    id: Option<EntryId>,
    title: Option<String>,
    deleted_at: Option<Timestamp>,
}

impl EntryBuilder {
    #[must_use]
    pub fn id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn deleted_at(mut self, at: Timestamp) -> Self {
        self.deleted_at = Some(at);
        self
    }

    /// Consume the builder and return an [`Entry`].
    ///
    /// Titles are free text: empty titles are accepted.
    #[must_use]
    pub fn build(self) -> Entry {
        let created_at = time::now();
        Entry {
            id: self.id.unwrap_or_default(),
            created_at,
            updated_at: created_at,
            deleted_at: self.deleted_at,
            title: self.title.unwrap_or_default(),
        }
    }
}
