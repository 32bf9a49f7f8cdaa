//! Session inspection and teardown endpoints.
//!
//! GET  /api/v1/sessions/{id}/turns -- the ordered turn history.
//! DELETE /api/v1/sessions/{id} -- destroy a session.

use std::time::Instant;

use axum::extract::{Path, State};
use uuid::Uuid;

use contentry_types::chat::Turn;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/sessions/{id}/turns -- ordered turn list.
pub async fn get_turns(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Vec<Turn>>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let orchestrator = state
        .sessions
        .get(&id)
        .map(|entry| entry.value().clone())
        .ok_or(AppError::SessionNotFound)?;

    let session = orchestrator.lock().await;
    let turns = session.store().turns().to_vec();

    Ok(ApiResponse::success(
        turns,
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}

/// DELETE /api/v1/sessions/{id} -- destroy a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state
        .sessions
        .remove(&id)
        .ok_or(AppError::SessionNotFound)?;

    Ok(ApiResponse::success(
        serde_json::json!({ "deleted": true, "session_id": id }),
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}
