//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`JotterError`]
//! via `#[from]` (or `From` impls for boxed adapter errors).

use std::num::ParseIntError;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum JotterError {
    /// The caller supplied input that could not be interpreted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Client input errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A path id did not parse as an integer.
    #[error("invalid entry id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A path id could not be read as text at all.
    #[error("invalid entry id: {0}")]
    UnreadableId(String),

    /// A request body was not valid JSON for the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_offending_value_in_invalid_id_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = JotterError::from(ValidationError::InvalidId {
            value: "abc".to_string(),
            source,
        });
        let message = err.to_string();
        assert!(message.contains("\"abc\""), "{message}");
        assert!(message.contains("invalid digit"), "{message}");
    }

    #[test]
    fn should_describe_unreadable_id() {
        let err = ValidationError::UnreadableId("Invalid UTF-8 in `id`".to_string());
        assert_eq!(err.to_string(), "invalid entry id: Invalid UTF-8 in `id`");
    }

    #[test]
    fn should_convert_json_error_into_validation_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = JotterError::from(ValidationError::from(json_err));
        assert!(matches!(
            err,
            JotterError::Validation(ValidationError::MalformedBody(_))
        ));
    }
}
