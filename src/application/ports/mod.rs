//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod fetcher;
pub mod generator;
pub mod transcriber;

// Re-export common types
pub use fetcher::{AudioFetcher, FetchError};
pub use generator::{GenerationError, Generator};
pub use transcriber::{Transcriber, TranscriptionError};
