//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OpenAI and Anthropic APIs.

pub mod fetch;
pub mod generation;
pub mod transcription;

// Re-export adapters
pub use fetch::HttpAudioFetcher;
pub use generation::ClaudeGenerator;
pub use transcription::WhisperTranscriber;
