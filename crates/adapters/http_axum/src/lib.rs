//! # jotter-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the entry **JSON API** (`/api/entries`, `/api/entry/{id}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: JSON on success,
//!   plain-text error messages with `422` or `500` on failure
//! - Bound every request with read and overall timeouts
//!
//! ## Dependency rule
//! Depends on `jotter-app` (for port traits and services) and `jotter-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
