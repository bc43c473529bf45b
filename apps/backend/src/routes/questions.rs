//! Question bank endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/questions
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<Json<QuestionListResponse>> {
    let questions = state
        .bank
        .filter(query.day.as_deref(), query.subject.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(QuestionListResponse { questions }))
}

/// GET /api/questions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<QuestionId>,
) -> Result<Json<Question>> {
    let question = state
        .bank
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Question {}", id)))?;

    Ok(Json(question))
}
