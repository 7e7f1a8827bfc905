//! # jotter-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement:
//!   - `EntryRepository` — list, get, insert, update title, soft delete
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `EntryService` — the five entry operations exposed over HTTP
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `jotter-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
