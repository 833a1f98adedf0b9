//! Journal entry value object

use serde::Deserialize;

use super::error::EntryValidationError;

/// A single dated journal entry supplied by the caller.
/// Entries carry no identity beyond their position in the request;
/// rendering order must match input order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: String,
    pub content: String,
}

impl JournalEntry {
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
        }
    }
}

/// Validate that every entry carries both fields.
/// Rendering an entry with an empty date or content is undefined,
/// so reject early instead.
pub fn validate_entries(entries: &[JournalEntry]) -> Result<(), EntryValidationError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.date.trim().is_empty() {
            return Err(EntryValidationError {
                index,
                field: "date",
            });
        }
        if entry.content.trim().is_empty() {
            return Err(EntryValidationError {
                index,
                field: "content",
            });
        }
    }
    Ok(())
}
