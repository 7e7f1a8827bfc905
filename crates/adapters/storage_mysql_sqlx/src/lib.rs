//! # jotter-adapter-storage-mysql-sqlx
//!
//! `MySQL` persistence adapter using [sqlx](https://docs.rs/sqlx), for
//! deployments that keep entries on a networked database server.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `jotter-app::ports::storage`
//! - Open the connection pool and run the embedded `MySQL` migration
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `jotter-app` (for port traits) and `jotter-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod entry_repo;
mod error;
mod pool;

pub use entry_repo::MySqlEntryRepository;
pub use error::StorageError;
