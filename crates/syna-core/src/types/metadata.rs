//! Timing metadata for a processed thought.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ThoughtId;

/// Metadata about a single run through the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtMetadata {
    /// Unique identifier for this thought
    pub thought_id: ThoughtId,

    /// When processing started
    pub started_at: DateTime<Utc>,

    /// When processing completed (if finished)
    pub completed_at: Option<DateTime<Utc>>,
}

impl ThoughtMetadata {
    /// Starts tracking a new thought.
    pub fn start() -> Self {
        Self {
            thought_id: ThoughtId::new(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Marks this thought as completed.
    pub fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Returns how long processing took.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.completed_at
            .map(|end| end.signed_duration_since(self.started_at))
    }

    /// Returns `true` if processing has completed.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
