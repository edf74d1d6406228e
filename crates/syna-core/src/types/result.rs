//! Processing result type.

use serde::{Deserialize, Serialize};

use super::{ProcessingMode, unit_clamp};

/// What a processor produced for one thought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Insights in priority order
    pub insights: Vec<String>,

    /// Confidence in the insights, in `[0, 1]`
    pub confidence: f64,

    /// Names of the stages the thought went through
    pub processing_path: Vec<String>,

    /// Abstract work units spent, never negative
    pub resource_usage: f64,

    /// How far the insights stray from the obvious, in `[0, 1]`
    pub novelty_score: f64,

    /// Mode that produced this result
    pub mode: ProcessingMode,
}

impl ProcessingResult {
    /// Creates a result, normalizing the numeric scores.
    ///
    /// Confidence and novelty are clamped into `[0, 1]`; resource usage is
    /// floored at zero. NaN becomes zero.
    pub fn new(
        mode: ProcessingMode,
        insights: Vec<String>,
        confidence: f64,
        processing_path: Vec<String>,
        resource_usage: f64,
        novelty_score: f64,
    ) -> Self {
        let resource_usage = if resource_usage.is_nan() {
            0.0
        } else {
            resource_usage.max(0.0)
        };
        Self {
            insights,
            confidence: unit_clamp(confidence),
            processing_path,
            resource_usage,
            novelty_score: unit_clamp(novelty_score),
            mode,
        }
    }

    /// Returns `true` if no insight was produced.
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}
