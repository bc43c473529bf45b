//! Study endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use quizdrill_core::{build_queue, due_queue, grade, new_queue, Confidence, NewCardLimit};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/study/queue
pub async fn queue(
    State(state): State<AppState>,
    Query(query): Query<StudyQueueQuery>,
) -> Result<Json<StudyQueueResponse>> {
    let limit = match query.max_new.as_deref() {
        Some(value) => value.parse::<NewCardLimit>().map_err(|_| {
            ApiError::BadRequest(format!("max_new must be a number or \"unlimited\", got {:?}", value))
        })?,
        None => state.config.max_new_cards,
    };

    let progress = state.store.load();
    let ids = state.bank.ids();
    let today = state.clock.today();

    let question_ids = build_queue(query.mode, &progress, &ids, today, limit);

    tracing::debug!(
        "Built {:?} queue with {} questions (new limit {})",
        query.mode,
        question_ids.len(),
        limit
    );

    Ok(Json(StudyQueueResponse {
        mode: query.mode,
        question_ids,
        due_count: due_queue(&progress, &ids, today).len(),
        new_count: new_queue(&progress, &ids, limit).len(),
    }))
}

/// POST /api/study/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    let question = state
        .bank
        .get(payload.question_id)
        .ok_or_else(|| ApiError::NotFound(format!("Question {}", payload.question_id)))?;

    let confidence = payload
        .confidence
        .as_deref()
        .map(str::parse::<Confidence>)
        .transpose()?;

    let correct = question.is_correct(payload.choice);
    let now = state.clock.now();

    let progress = state.store.update(|progress| {
        grade(
            progress,
            state.algorithm.as_ref(),
            payload.mode,
            payload.question_id,
            correct,
            confidence,
            now,
        )
        .map_err(ApiError::from)
    })?;

    let record = if payload.mode.schedules() {
        progress.record(payload.question_id).cloned()
    } else {
        None
    };

    tracing::info!(
        "Answered question {} in {:?} mode ({}): correct={} confidence={:?}",
        payload.question_id,
        payload.mode,
        state.algorithm.name(),
        correct,
        confidence
    );

    Ok(Json(SubmitAnswerResponse {
        correct,
        answer: question.answer,
        record,
        wrong_answer_count: progress.wrong_answers.len(),
    }))
}
