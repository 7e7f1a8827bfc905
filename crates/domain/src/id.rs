//! Typed identifier newtype backed by the store's integer surrogate key.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

/// Unique identifier for an [`Entry`](crate::entry::Entry).
///
/// Assigned by the store on insert and never reused. The default value `0`
/// never names a stored row and marks the zero-value entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Wrap a raw key as produced by the store.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the inner key.
    #[must_use]
    pub fn as_raw(self) -> i64 {
        self.0
    }

    /// Whether this id can name a stored row.
    #[must_use]
    pub fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_id() {
        let id: EntryId = "42".parse().unwrap();
        assert_eq!(id.as_raw(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(EntryId::from_str("abc").is_err());
        assert!(EntryId::from_str("").is_err());
        assert!(EntryId::from_str("1.5").is_err());
    }

    #[test]
    fn should_treat_default_id_as_unassigned() {
        assert!(!EntryId::default().is_assigned());
        assert!(EntryId::from_raw(1).is_assigned());
    }

    #[test]
    fn should_serialize_as_plain_integer() {
        let json = serde_json::to_string(&EntryId::from_raw(7)).unwrap();
        assert_eq!(json, "7");
    }
}
