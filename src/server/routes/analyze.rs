//! Analysis route handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::JournalEntry;
use crate::server::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub entries: Vec<JournalEntry>,
    pub transcript: String,
    pub persona: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /api_analyze
///
/// Blocks for the full generation round trip, then returns
/// `{"analysis": ...}` or `{"error": ...}`.
pub async fn api_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;

    let analysis = state
        .analyze
        .execute(&request.entries, &request.transcript, &request.persona)
        .await?;

    Ok(Json(AnalyzeResponse { analysis }))
}
