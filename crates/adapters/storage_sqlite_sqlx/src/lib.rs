//! # jotter-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `jotter-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run the embedded migration that creates the `entries` table
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `jotter-app` (for port traits) and `jotter-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod entry_repo;
mod error;
mod pool;

pub use entry_repo::SqliteEntryRepository;
pub use error::StorageError;
