//! Core types for Syna processing.

mod ids;
mod metadata;
mod mode;
mod profile;
mod proptests;
mod result;

pub use ids::ThoughtId;
pub use metadata::ThoughtMetadata;
pub use mode::ProcessingMode;
pub use profile::TaskProfile;
pub use result::ProcessingResult;

/// Clamps a score into `[0, 1]`, mapping NaN to zero.
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
