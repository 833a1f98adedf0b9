//! Application layer - Worker use cases and port interfaces

pub mod analyze;
pub mod ports;
pub mod transcribe;

pub use analyze::{AnalyzeError, RunAnalysisUseCase};
pub use transcribe::{TranscribeAudioUseCase, TranscribeError};
