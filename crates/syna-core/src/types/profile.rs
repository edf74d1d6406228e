//! Task characteristics used to pick a processing mode.

use serde::{Deserialize, Serialize};

use super::unit_clamp;

/// How demanding a task is along each axis, every score in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskProfile {
    /// Overall size and structure of the task
    pub complexity: f64,

    /// How much the task asks for new associations
    pub creativity_required: f64,

    /// How much the task asks for focused analysis
    pub analysis_required: f64,
}

impl TaskProfile {
    /// Creates a profile, clamping each score into `[0, 1]`.
    pub fn new(complexity: f64, creativity_required: f64, analysis_required: f64) -> Self {
        Self {
            complexity: unit_clamp(complexity),
            creativity_required: unit_clamp(creativity_required),
            analysis_required: unit_clamp(analysis_required),
        }
    }
}
