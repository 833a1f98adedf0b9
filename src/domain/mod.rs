//! Domain layer - Core value objects and errors
//!
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod journal;
pub mod prompt;

// Re-export common types
pub use audio::{AudioMimeType, FetchedAudio, SpooledAudio};
pub use config::AppConfig;
pub use error::{ConfigError, EntryValidationError};
pub use journal::JournalEntry;
pub use prompt::AnalysisPrompt;
