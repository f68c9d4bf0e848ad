// Transient status shown after an import attempt
//
// The importer only produces the outcome; the UI decides when to stop showing it.

use std::time::{Duration, Instant};

use super::pipeline::ImportOutcome;

/// A user-visible import message with the instant it was first shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatus {
    message: String,
    shown_at: Instant,
    display_window: Duration,
}

impl ImportStatus {
    pub fn new(outcome: &ImportOutcome, shown_at: Instant, display_window: Duration) -> Self {
        Self {
            message: Self::message_for(outcome),
            shown_at,
            display_window,
        }
    }

    fn message_for(outcome: &ImportOutcome) -> String {
        match outcome {
            ImportOutcome::Success { count, name } => {
                format!("Imported {} words from {}", count, name)
            }
            ImportOutcome::Empty => "No valid words found in file".to_string(),
            ImportOutcome::Error(_) => "Failed to import dictionary".to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the message should no longer be displayed at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.display_window
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
