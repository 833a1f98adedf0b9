//! Adapter-boundary error shape
//!
//! Every failure leaving the service goes through [`ApiError`], so the
//! client always receives well-formed JSON with an `error` field and a
//! non-success status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FetchError, GenerationError, TranscriptionError};
use crate::application::{AnalyzeError, TranscribeError};

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing error: a status code and a sanitized message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<TranscribeError> for ApiError {
    fn from(err: TranscribeError) -> Self {
        // Transport and I/O errors carry provider URLs and local paths;
        // the client gets a generic message, the tracing record keeps the
        // detail.
        let message = match &err {
            TranscribeError::Fetch(FetchError::Request(_) | FetchError::Body(_)) => {
                "Audio fetch failed: audio URL could not be retrieved".to_string()
            }
            TranscribeError::Spool(_) => "Failed to spool audio to disk".to_string(),
            TranscribeError::Transcription(TranscriptionError::RequestFailed(_)) => {
                "Transcription failed: provider request did not complete".to_string()
            }
            TranscribeError::Transcription(TranscriptionError::Io(_)) => {
                "Transcription failed: could not read spooled audio".to_string()
            }
            _ => err.to_string(),
        };
        Self::internal(message)
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        let message = match &err {
            AnalyzeError::Generation(GenerationError::RequestFailed(_)) => {
                "Analysis generation failed: provider request did not complete".to_string()
            }
            _ => err.to_string(),
        };
        match err {
            AnalyzeError::InvalidEntry(_) => Self::bad_request(message),
            _ => Self::internal(message),
        }
    }
}
