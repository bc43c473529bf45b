//! Progress backup and sequential-position endpoints

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use quizdrill_core::snapshot;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/progress/export
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let text = snapshot::export(&state.store.load())?;
    Ok(([(header::CONTENT_TYPE, "application/json")], text))
}

/// POST /api/progress/import
///
/// The body is validated in full before the stored history is replaced.
pub async fn import(State(state): State<AppState>, body: String) -> Result<Json<ImportResponse>> {
    let progress = snapshot::import(&body)?;
    let response = ImportResponse {
        records: progress.records.len(),
        history: progress.history.len(),
    };

    state.store.replace(progress)?;

    tracing::info!(
        "Imported progress snapshot with {} records and {} history entries",
        response.records,
        response.history
    );

    Ok(Json(response))
}

/// GET /api/progress/sequential/{day}
pub async fn get_sequential(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<SequentialResponse>> {
    let index = state.store.load().sequential_position(&day);
    let total = state.bank.questions_for_day(&day).len();
    Ok(Json(SequentialResponse { day, index, total }))
}

/// PUT /api/progress/sequential/{day}
pub async fn set_sequential(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(request): Json<SequentialRequest>,
) -> Result<Json<SequentialResponse>> {
    let total = state.bank.questions_for_day(&day).len();
    let progress = state
        .store
        .update(|p| Ok::<_, ApiError>(p.set_sequential(&day, request.index, total)))?;

    Ok(Json(SequentialResponse {
        index: progress.sequential_position(&day),
        day,
        total,
    }))
}
