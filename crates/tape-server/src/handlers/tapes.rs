//! Tape handlers

use crate::error::ApiError;
use crate::response::{IndentedJson, MessageResponse};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tape_core::{CreateOutcome, Tape};
use tracing::warn;

/// Query pairs in request order, so a repeated `genre` resolves to the first one.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<IndentedJson<Vec<Tape>>, ApiError> {
    let genre = params
        .iter()
        .find(|(key, _)| key == "genre")
        .map(|(_, value)| value.as_str());

    let tapes = state.catalog.list_tapes(genre)?;
    Ok(IndentedJson(tapes))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Tape>, ApiError> {
    let tape = state.catalog.get_tape(&id)?;
    Ok(IndentedJson(tape))
}

/// Add a tape, or bump the stock of a matching title.
///
/// The body is parsed regardless of its content type. An unreadable body,
/// including one over the request size limit, is a binding error.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body.map_err(|e| {
        warn!("Failed to read request body: {}", e);
        ApiError::Body(e)
    })?;

    let candidate: Tape = serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to bind tape from request body: {}", e);
        ApiError::Binding(e)
    })?;

    let response = match state.catalog.create_tape(candidate) {
        CreateOutcome::Created(tape) => (StatusCode::CREATED, IndentedJson(tape)).into_response(),
        CreateOutcome::Merged { title, quantity } => IndentedJson(MessageResponse::new(format!(
            "The title, \"{}\", is already in the catalog. We now have {} units in stock.",
            title, quantity
        )))
        .into_response(),
    };

    Ok(response)
}
