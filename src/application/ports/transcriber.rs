//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::SpooledAudio;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty transcription response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to read audio file: {0}")]
    Io(String),
}

/// Port for speech-to-text transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the spooled audio file to text.
    ///
    /// Returns the provider's transcript as-is, with no post-processing.
    async fn transcribe(&self, audio: &SpooledAudio) -> Result<String, TranscriptionError>;
}
