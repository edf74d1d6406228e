//! The tri-modal engine.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use syna_core::{
    Error, ProcessingMode, ProcessingResult, Result, SynaConfig, TaskProfile, ThoughtMetadata,
    ThoughtProcessor,
};
use syna_processors::{ConvergentProcessor, DivergentProcessor, TextAnalyzer};
use tokio::sync::watch;

use crate::bilateral::{BilateralProcessor, run_with_budget};
use crate::callosum::CorpusCallosum;
use crate::selector::ModeSelector;

/// Everything the engine reports about one processed thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtOutput {
    /// Identity and timing
    pub metadata: ThoughtMetadata,

    /// Profile computed for the input
    pub profile: TaskProfile,

    /// Mode that processed the input
    pub mode: ProcessingMode,

    /// What the processor produced
    pub result: ProcessingResult,
}

/// Main engine with tri-modal processing.
///
/// Each input is profiled, a mode is selected, and the matching processor
/// runs it. The most recently used mode is published through a watch
/// channel; it starts as [`ProcessingMode::Bilateral`].
pub struct EnhancedSyna {
    divergent: Arc<dyn ThoughtProcessor>,
    convergent: Arc<dyn ThoughtProcessor>,
    bilateral: BilateralProcessor,
    mode_selector: ModeSelector,
    current_mode: watch::Sender<ProcessingMode>,
    max_input_chars: usize,
    timeout_ms: u64,
}

impl EnhancedSyna {
    /// Creates an engine with the built-in processors.
    pub fn new(config: &SynaConfig) -> Result<Self> {
        Self::with_processors(
            config,
            Arc::new(DivergentProcessor::new(&config.processing)),
            Arc::new(ConvergentProcessor::new(&config.processing)),
        )
    }

    /// Creates an engine around custom single-mode processors.
    ///
    /// Bilateral mode runs the same two processors.
    pub fn with_processors(
        config: &SynaConfig,
        divergent: Arc<dyn ThoughtProcessor>,
        convergent: Arc<dyn ThoughtProcessor>,
    ) -> Result<Self> {
        config.validate()?;

        let bilateral = BilateralProcessor::new(
            divergent.clone(),
            convergent.clone(),
            CorpusCallosum::new(&config.integration, config.processing.max_insights),
            config.processing.timeout_ms,
        );
        let mode_selector =
            ModeSelector::new(&config.selection, TextAnalyzer::new(&config.processing));
        let (current_mode, _rx) = watch::channel(ProcessingMode::default());

        Ok(Self {
            divergent,
            convergent,
            bilateral,
            mode_selector,
            current_mode,
            max_input_chars: config.processing.max_input_chars,
            timeout_ms: config.processing.timeout_ms,
        })
    }

    /// Process input using the most appropriate mode.
    pub async fn process_input(&self, input: &str) -> Result<ThoughtOutput> {
        self.validate_input(input)?;
        let profile = self.mode_selector.analyze_task(input);
        let mode = self.mode_selector.select_mode(&profile);
        self.run(input, profile, mode).await
    }

    /// Process input with a caller-chosen mode, skipping selection.
    pub async fn process_with_mode(
        &self,
        input: &str,
        mode: ProcessingMode,
    ) -> Result<ThoughtOutput> {
        self.validate_input(input)?;
        let profile = self.mode_selector.analyze_task(input);
        self.run(input, profile, mode).await
    }

    /// Processes many inputs with at most `concurrency` in flight.
    ///
    /// Results come back in input order, one per input.
    pub async fn process_batch<I, S>(&self, inputs: I, concurrency: usize) -> Vec<Result<ThoughtOutput>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        stream::iter(inputs)
            .map(|input| async move { self.process_input(input.as_ref()).await })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Profile an input without processing it.
    pub fn analyze(&self, input: &str) -> Result<(TaskProfile, ProcessingMode)> {
        self.validate_input(input)?;
        let profile = self.mode_selector.analyze_task(input);
        let mode = self.mode_selector.select_mode(&profile);
        Ok((profile, mode))
    }

    /// The mode used for the most recent input.
    pub fn current_mode(&self) -> ProcessingMode {
        *self.current_mode.borrow()
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<ProcessingMode> {
        self.current_mode.subscribe()
    }

    async fn run(
        &self,
        input: &str,
        profile: TaskProfile,
        mode: ProcessingMode,
    ) -> Result<ThoughtOutput> {
        let mut metadata = ThoughtMetadata::start();

        tracing::info!(
            thought_id = %metadata.thought_id,
            mode = %mode,
            creativity = profile.creativity_required,
            analysis = profile.analysis_required,
            "Processing thought"
        );

        self.current_mode.send_replace(mode);

        let processor: &dyn ThoughtProcessor = match mode {
            ProcessingMode::Bilateral => &self.bilateral,
            ProcessingMode::Divergent => self.divergent.as_ref(),
            ProcessingMode::Convergent => self.convergent.as_ref(),
        };
        let result = match mode {
            // Bilateral budgets each side itself
            ProcessingMode::Bilateral => processor.process_thought(input).await,
            _ => run_with_budget(processor, input, self.timeout_ms).await,
        }
        .inspect_err(|e| {
            tracing::error!(thought_id = %metadata.thought_id, mode = %mode, error = %e, "Thought failed");
        })?;

        metadata.mark_completed();

        tracing::info!(
            thought_id = %metadata.thought_id,
            insights = result.insights.len(),
            confidence = result.confidence,
            novelty = result.novelty_score,
            "Thought processed"
        );

        Ok(ThoughtOutput {
            metadata,
            profile,
            mode,
            result,
        })
    }

    fn validate_input(&self, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Err(Error::validation_field("input", "must not be empty"));
        }
        let chars = input.chars().count();
        if chars > self.max_input_chars {
            return Err(Error::validation_field(
                "input",
                format!(
                    "is {chars} characters long, limit is {}",
                    self.max_input_chars
                ),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for EnhancedSyna {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhancedSyna")
            .field("current_mode", &self.current_mode())
            .field("bilateral", &self.bilateral)
            .field("max_input_chars", &self.max_input_chars)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}
