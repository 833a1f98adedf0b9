//! Text generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prompt::AnalysisPrompt;

/// Text generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty generation response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for persona-conditioned text generation
#[async_trait]
pub trait Generator: Send + Sync {
    /// Submit the system/user prompt pair and return the first generated
    /// content block's text, as-is.
    async fn generate(&self, prompt: &AnalysisPrompt) -> Result<String, GenerationError>;
}
