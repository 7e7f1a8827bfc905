//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jotter_domain::error::{JotterError, ValidationError};

/// Maps [`JotterError`] to a plain-text HTTP response.
///
/// Client input errors become `422 Unprocessable Entity`, everything else
/// `500 Internal Server Error`. The body is the error message.
#[derive(Debug)]
pub struct ApiError(JotterError);

impl From<JotterError> for ApiError {
    fn from(err: JotterError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            JotterError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            JotterError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.0.to_string()).into_response()
    }
}
