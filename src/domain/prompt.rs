//! Analysis prompt value object

use super::journal::JournalEntry;

/// Literal request that closes every user message.
const ANALYSIS_REQUEST: &str = "Analyze me.";

/// Value object holding the system/user prompt pair for the analysis call.
///
/// The user message renders each entry as a `Date:`/`Content:` block, with
/// blank lines separating the blocks, the transcript, and the closing
/// analysis request. This template is fixed; tests assert its exact shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    system: String,
    user: String,
}

impl AnalysisPrompt {
    /// Build the prompt pair from journal entries, an interview transcript,
    /// and the persona whose voice the analysis should take.
    pub fn build(entries: &[JournalEntry], transcript: &str, persona: &str) -> Self {
        let system = format!(
            "You are {persona}. You are a world-class psychoanalyst and philosopher. \
             Your goal is to read the user's journal entries and their self-reflection \
             interview, and provide a \"Drastic Diagnosis\" - a deep, penetrating \
             analysis of their subconscious patterns, limiting beliefs, and hidden \
             strengths.\n\nBe direct, profound, and transformative. \
             Use the voice and style of {persona}."
        );

        let mut blocks: Vec<String> = entries
            .iter()
            .map(|e| format!("Date: {}\nContent: {}", e.date, e.content))
            .collect();
        blocks.push(transcript.to_string());
        blocks.push(ANALYSIS_REQUEST.to_string());

        Self {
            system,
            user: blocks.join("\n\n"),
        }
    }

    /// Get the system instruction
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Get the user message
    pub fn user(&self) -> &str {
        &self.user
    }
}
