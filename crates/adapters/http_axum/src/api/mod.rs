//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod entries;

use axum::Router;
use axum::routing::{get, post};

use jotter_app::ports::EntryRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/entries", get(entries::list::<R>))
        .route("/entry", post(entries::create::<R>))
        .route(
            "/entry/{id}",
            get(entries::get::<R>)
                .put(entries::update::<R>)
                .delete(entries::delete::<R>),
        )
}
