//! Anthropic Messages API generator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, Generator};
use crate::domain::prompt::AnalysisPrompt;

/// Claude model to use
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";

/// Anthropic API base URL
const API_BASE_URL: &str = "https://api.anthropic.com";

/// Required API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed maximum output length
const MAX_TOKENS: u32 = 4096;

/// Fixed sampling temperature
const TEMPERATURE: f32 = 0.7;

// Request types for the Messages API

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

// Response types for the Messages API

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Anthropic Messages API generator
pub struct ClaudeGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl ClaudeGenerator {
    /// Create a new Claude generator with the given API key
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the generation model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Build the request body
    fn build_request(&self, prompt: &AnalysisPrompt) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system: prompt.system().to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.user().to_string(),
            }],
        }
    }

    /// Extract the first content block's text from the response
    fn extract_text(response: &MessagesResponse) -> Option<String> {
        response.content.first()?.text.clone()
    }
}

#[async_trait]
impl Generator for ClaudeGenerator {
    async fn generate(&self, prompt: &AnalysisPrompt) -> Result<String, GenerationError> {
        let body = self.build_request(prompt);

        let response = self
            .client
            .post(self.api_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|r| r.error.message)
                .unwrap_or(error_text);
            return Err(GenerationError::ApiError(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        Self::extract_text(&response).ok_or(GenerationError::EmptyResponse)
    }
}
