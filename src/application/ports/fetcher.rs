//! Audio retrieval port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::FetchedAudio;

/// Audio fetch errors
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Failed to fetch audio: {0}")]
    Request(String),

    #[error("Audio URL returned HTTP {0}")]
    Status(u16),

    #[error("Failed to read audio body: {0}")]
    Body(String),
}

/// Port for retrieving the caller-supplied audio resource
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Fetch the audio resource at `url` and return its raw bytes
    /// together with the detected MIME type.
    async fn fetch(&self, url: &str) -> Result<FetchedAudio, FetchError>;
}
