//! # jotter-domain
//!
//! Pure domain model for the jotter entry service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifier, error conventions, timestamps
//! - Define the **Entry** record (id, title, lifecycle timestamps, soft-delete marker)
//! - Define the zero-value entry returned when an id lookup misses
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod entry;
