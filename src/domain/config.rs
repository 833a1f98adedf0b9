//! Application configuration value object

use super::error::ConfigError;

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Anthropic API key
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Process configuration, read once at startup.
/// Provider credentials are injected by the hosting environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    /// Override for the speech-to-text model, defaults to whisper-1
    pub whisper_model: Option<String>,
    /// Override for the generation model, defaults to claude-3-5-sonnet
    pub claude_model: Option<String>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    /// Missing credentials fail fast at startup rather than per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: required_var(OPENAI_API_KEY_VAR)?,
            anthropic_api_key: required_var(ANTHROPIC_API_KEY_VAR)?,
            whisper_model: optional_var("WHISPER_MODEL"),
            claude_model: optional_var("CLAUDE_MODEL"),
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingKey(name)),
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
