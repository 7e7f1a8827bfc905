//! Storage-specific error type wrapping sqlx errors.

use jotter_domain::error::JotterError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for JotterError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
