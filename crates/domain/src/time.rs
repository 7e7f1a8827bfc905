//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, `updated_at` and `deleted_at`.
pub type Timestamp = DateTime<Utc>;

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch.
const ZERO_TIME_UNIX_SECS: i64 = -62_135_596_800;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// The zero time, `0001-01-01T00:00:00Z`, carried by the zero-value entry.
#[must_use]
pub fn zero() -> Timestamp {
    DateTime::<Utc>::from_timestamp(ZERO_TIME_UNIX_SECS, 0).unwrap_or_default()
}
