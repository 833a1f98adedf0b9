//! Transcription route handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// POST /api_transcribe
///
/// Blocks for the full fetch-and-transcribe round trip, then returns
/// `{"text": ...}` or `{"error": ...}`.
pub async fn api_transcribe(
    State(state): State<AppState>,
    payload: Result<Json<TranscribeRequest>, JsonRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let Json(request) = payload?;

    let text = state.transcribe.execute(&request.audio_url).await?;

    Ok(Json(TranscribeResponse { text }))
}
