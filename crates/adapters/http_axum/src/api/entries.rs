//! JSON REST handlers for entries.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use jotter_app::ports::EntryRepository;
use jotter_domain::entry::Entry;
use jotter_domain::error::ValidationError;
use jotter_domain::id::EntryId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating an entry.
#[derive(Debug, Default)]
pub struct EntryRequest {
    pub title: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Entry>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum EntryResponse {
    Ok(Json<Entry>),
}

impl IntoResponse for EntryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response(),
        }
    }
}

/// Turn the `{id}` segment into an [`EntryId`].
///
/// Segments the router cannot even decode (e.g. `%FF`) are client errors
/// like any other unparseable id.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<EntryId, ApiError> {
    let Path(raw) = path.map_err(|rejection| ValidationError::UnreadableId(rejection.body_text()))?;
    EntryId::from_str(&raw).map_err(|source| {
        ApiError::from(ValidationError::InvalidId { value: raw, source })
    })
}

fn malformed(err: serde_json::Error) -> ApiError {
    ApiError::from(ValidationError::from(err))
}

/// Decode an entry request whatever the request's `Content-Type`.
///
/// Only the first JSON value is read; anything after it is ignored. A `null`
/// body is an empty request. The `title` key matches case-insensitively,
/// unknown keys are skipped and a `null` title leaves the title empty.
fn decode_request(body: &[u8]) -> Result<EntryRequest, ApiError> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("request body is empty")))
        .map_err(malformed)?;

    let fields = match value {
        Value::Null => return Ok(EntryRequest::default()),
        other => serde_json::from_value::<Map<String, Value>>(other).map_err(malformed)?,
    };

    let mut request = EntryRequest::default();
    for (key, field) in fields {
        if !key.eq_ignore_ascii_case("title") {
            continue;
        }
        if let Some(title) = serde_json::from_value::<Option<String>>(field).map_err(malformed)? {
            request.title = title;
        }
    }
    Ok(request)
}

/// `GET /api/entries`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entries = state.entry_service.list_entries().await?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /api/entry/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<EntryResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entry_id = parse_id(id)?;
    let entry = state.entry_service.get_entry(entry_id).await?;
    Ok(EntryResponse::Ok(Json(entry)))
}

/// `POST /api/entry`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<EntryResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let req = decode_request(&body)?;
    let created = state.entry_service.create_entry(req.title).await?;
    Ok(EntryResponse::Ok(Json(created)))
}

/// `PUT /api/entry/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<EntryResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entry_id = parse_id(id)?;
    let req = decode_request(&body)?;
    let updated = state
        .entry_service
        .update_entry(entry_id, req.title)
        .await?;
    Ok(EntryResponse::Ok(Json(updated)))
}

/// `DELETE /api/entry/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entry_id = parse_id(id)?;
    state.entry_service.delete_entry(entry_id).await?;
    Ok(DeleteResponse::Ok)
}
