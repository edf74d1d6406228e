//! The processor abstraction every mode implements.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ProcessingMode, ProcessingResult};

/// A component that turns one thought into a [`ProcessingResult`].
///
/// Processors are shared behind `Arc` and may be driven concurrently, so
/// implementations must be `Send + Sync`.
#[async_trait]
pub trait ThoughtProcessor: Send + Sync {
    /// Processes a single thought.
    async fn process_thought(&self, input: &str) -> Result<ProcessingResult>;

    /// The mode this processor implements.
    fn mode(&self) -> ProcessingMode;
}
