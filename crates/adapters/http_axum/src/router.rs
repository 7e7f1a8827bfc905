//! Axum router assembly.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use jotter_app::ports::EntryRepository;

use crate::state::AppState;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a `/health` probe. Every request is
/// bounded by `timeout`, both for reading the body and for the whole
/// exchange. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>, timeout: Duration) -> Router
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(RequestBodyTimeoutLayer::new(timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
