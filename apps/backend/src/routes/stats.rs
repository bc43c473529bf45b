//! Statistics endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StudySummary;
use crate::AppState;

/// GET /api/stats
pub async fn summary(State(state): State<AppState>) -> Result<Json<StudySummary>> {
    let progress = state.store.load();
    let ids = state.bank.ids();
    Ok(Json(StudySummary::compute(&progress, &ids, state.clock.today())))
}
