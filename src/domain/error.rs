//! Domain error types

use thiserror::Error;

/// Error when a journal entry is missing required content
#[derive(Debug, Clone, Error)]
#[error("Journal entry {index} is missing a {field}")]
pub struct EntryValidationError {
    pub index: usize,
    pub field: &'static str,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingKey(&'static str),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
