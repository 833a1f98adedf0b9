//! Run analysis use case

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::domain::error::EntryValidationError;
use crate::domain::journal::{validate_entries, JournalEntry};
use crate::domain::prompt::AnalysisPrompt;

use super::ports::{GenerationError, Generator};

/// Ceiling on a single generation round trip.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Errors from the analysis worker
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Invalid journal entries: {0}")]
    InvalidEntry(#[from] EntryValidationError),

    #[error("Analysis generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Analysis timed out after {0} seconds")]
    Timeout(u64),
}

/// Analysis worker: validate the entries, render the persona-conditioned
/// prompt, and submit it to the text-generation provider under a fixed
/// time ceiling.
pub struct RunAnalysisUseCase {
    generator: Arc<dyn Generator>,
    timeout: Duration,
}

impl RunAnalysisUseCase {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the generation time ceiling
    pub fn with_timeout(generator: Arc<dyn Generator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Execute the analysis workflow for one request.
    pub async fn execute(
        &self,
        entries: &[JournalEntry],
        transcript: &str,
        persona: &str,
    ) -> Result<String, AnalyzeError> {
        let result = self.run(entries, transcript, persona).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, persona, entries = entries.len(), "analysis worker failed");
        }
        result
    }

    async fn run(
        &self,
        entries: &[JournalEntry],
        transcript: &str,
        persona: &str,
    ) -> Result<String, AnalyzeError> {
        validate_entries(entries)?;

        let prompt = AnalysisPrompt::build(entries, transcript, persona);

        let analysis = tokio::time::timeout(self.timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| AnalyzeError::Timeout(self.timeout.as_secs()))??;

        Ok(analysis)
    }
}
