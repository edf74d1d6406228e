//! Common test utilities and harness for Syna engine integration tests.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use syna_core::{ProcessingMode, ProcessingResult, Result, SynaConfig, ThoughtProcessor};
use syna_engine::EnhancedSyna;

/// Processor returning a fixed result, optionally after a delay.
///
/// Counts how many times it was called.
pub struct ScriptedProcessor {
    mode: ProcessingMode,
    result: ProcessingResult,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedProcessor {
    /// Creates a processor that answers immediately.
    pub fn new(mode: ProcessingMode, insights: &[&str], confidence: f64) -> Self {
        Self {
            mode,
            result: ProcessingResult::new(
                mode,
                insights.iter().map(|s| s.to_string()).collect(),
                confidence,
                vec![format!("scripted-{mode}")],
                1.0,
                0.1,
            ),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes the processor sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThoughtProcessor for ScriptedProcessor {
    async fn process_thought(&self, _input: &str) -> Result<ProcessingResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.result.clone())
    }

    fn mode(&self) -> ProcessingMode {
        self.mode
    }
}

/// Test harness holding an engine wired to scripted processors.
pub struct TestHarness {
    /// Engine under test
    pub syna: EnhancedSyna,
    /// Divergent side
    pub divergent: Arc<ScriptedProcessor>,
    /// Convergent side
    pub convergent: Arc<ScriptedProcessor>,
}

impl TestHarness {
    /// Builds a harness from the two scripted sides and a config.
    pub fn new(
        config: &SynaConfig,
        divergent: ScriptedProcessor,
        convergent: ScriptedProcessor,
    ) -> Self {
        let divergent = Arc::new(divergent);
        let convergent = Arc::new(convergent);
        let syna = EnhancedSyna::with_processors(config, divergent.clone(), convergent.clone())
            .expect("default config is valid");
        Self {
            syna,
            divergent,
            convergent,
        }
    }
}

/// Sides that agree on "dragon".
pub fn agreeing_sides() -> (ScriptedProcessor, ScriptedProcessor) {
    (
        ScriptedProcessor::new(
            ProcessingMode::Divergent,
            &["castle~dragon", "dragon~moat"],
            0.6,
        ),
        ScriptedProcessor::new(ProcessingMode::Convergent, &["dragon"], 0.7),
    )
}

/// Engine with the built-in processors and default configuration.
pub fn default_engine() -> EnhancedSyna {
    EnhancedSyna::new(&SynaConfig::default()).expect("default config is valid")
}
