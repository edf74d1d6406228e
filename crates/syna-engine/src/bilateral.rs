//! Bilateral processing: both modes at once.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use syna_core::{Error, ProcessingMode, ProcessingResult, Result, SynaConfig, ThoughtProcessor};
use syna_processors::{ConvergentProcessor, DivergentProcessor};
use tokio::task::JoinHandle;

use crate::callosum::CorpusCallosum;

/// Runs the divergent and convergent processors concurrently and merges
/// their results.
///
/// Each side runs as its own tokio task under the configured time budget.
/// If either side fails or times out, the whole thought fails.
#[derive(Clone)]
pub struct BilateralProcessor {
    divergent: Arc<dyn ThoughtProcessor>,
    convergent: Arc<dyn ThoughtProcessor>,
    corpus_callosum: CorpusCallosum,
    timeout_ms: u64,
}

impl BilateralProcessor {
    /// Creates a bilateral processor from explicit parts.
    pub fn new(
        divergent: Arc<dyn ThoughtProcessor>,
        convergent: Arc<dyn ThoughtProcessor>,
        corpus_callosum: CorpusCallosum,
        timeout_ms: u64,
    ) -> Self {
        Self {
            divergent,
            convergent,
            corpus_callosum,
            timeout_ms,
        }
    }

    /// Creates a bilateral processor with the built-in processors.
    pub fn from_config(config: &SynaConfig) -> Self {
        Self::new(
            Arc::new(DivergentProcessor::new(&config.processing)),
            Arc::new(ConvergentProcessor::new(&config.processing)),
            CorpusCallosum::new(&config.integration, config.processing.max_insights),
            config.processing.timeout_ms,
        )
    }
}

impl std::fmt::Debug for BilateralProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BilateralProcessor")
            .field("corpus_callosum", &self.corpus_callosum)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ThoughtProcessor for BilateralProcessor {
    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        let input: Arc<str> = Arc::from(input);

        tracing::debug!("Starting divergent and convergent tasks");

        let (divergent, convergent) = tokio::try_join!(
            spawn_processor(self.divergent.clone(), input.clone(), self.timeout_ms),
            spawn_processor(self.convergent.clone(), input, self.timeout_ms),
        )?;

        Ok(self
            .corpus_callosum
            .integrate_results(&divergent, &convergent))
    }

    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Bilateral
    }
}

/// Runs a processor on its own task under a time budget.
async fn spawn_processor(
    processor: Arc<dyn ThoughtProcessor>,
    input: Arc<str>,
    timeout_ms: u64,
) -> Result<ProcessingResult> {
    let mode = processor.mode();
    let mut task = AbortOnDrop(tokio::spawn(async move {
        run_with_budget(processor.as_ref(), &input, timeout_ms).await
    }));

    match (&mut task.0).await {
        Ok(result) => result,
        Err(join_error) => {
            tracing::error!(mode = %mode, error = %join_error, "Processor task failed");
            Err(Error::processor(mode, join_error.to_string()))
        }
    }
}

/// Aborts the task when dropped, so a side abandoned by `try_join!` stops.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs a processor in place, failing with [`Error::Timeout`] when it
/// overruns `timeout_ms`.
pub(crate) async fn run_with_budget(
    processor: &dyn ThoughtProcessor,
    input: &str,
    timeout_ms: u64,
) -> Result<ProcessingResult> {
    match tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        processor.process_thought(input),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(mode = %processor.mode(), timeout_ms, "Processor timed out");
            Err(Error::Timeout { millis: timeout_ms })
        }
    }
}
