//! Convergent processing: narrow a thought to its focus.

use async_trait::async_trait;
use syna_core::{Error, ProcessingConfig, ProcessingMode, ProcessingResult, Result, ThoughtProcessor};

use crate::text::{TextAnalyzer, rank};

/// Share of lexical variety that counts as novelty in convergent mode.
const NOVELTY_WEIGHT: f64 = 0.25;

/// Stages a convergent result reports.
const PATH: [&str; 4] = ["tokenize", "filter", "rank", "converge"];

/// Ranks content terms by frequency and keeps the strongest.
///
/// Confidence is the share of the text the kept terms account for, so a
/// thought that keeps returning to one subject scores high.
#[derive(Debug)]
pub struct ConvergentProcessor {
    analyzer: TextAnalyzer,
    max_insights: usize,
}

impl ConvergentProcessor {
    /// Creates a convergent processor.
    pub fn new(config: &ProcessingConfig) -> Self {
        Self {
            analyzer: TextAnalyzer::new(config),
            max_insights: config.max_insights,
        }
    }

    /// Runs the analysis synchronously.
    pub fn analyze(&self, input: &str) -> Result<ProcessingResult> {
        let tokens = self.analyzer.tokenize(input);
        if tokens.is_empty() {
            return Err(Error::validation_field("input", "contains no words"));
        }
        let token_count = tokens.len();
        let terms = self.analyzer.filter_tokens(tokens);

        let frequencies = self.analyzer.frequencies(&terms);
        let distinct = frequencies.len();
        let ranked = rank(frequencies);

        let focus: Vec<(&str, usize)> = ranked.into_iter().take(self.max_insights).collect();
        let covered: usize = focus.iter().map(|(_, count)| count).sum();

        let total = terms.len() as f64;
        let confidence = covered as f64 / total;
        let novelty = NOVELTY_WEIGHT * distinct as f64 / total;

        tracing::debug!(
            tokens = token_count,
            content_terms = terms.len(),
            distinct,
            confidence,
            "Convergent analysis complete"
        );

        Ok(ProcessingResult::new(
            ProcessingMode::Convergent,
            focus.into_iter().map(|(term, _)| term.to_string()).collect(),
            confidence,
            PATH.iter().map(|s| s.to_string()).collect(),
            token_count as f64,
            novelty,
        ))
    }
}

impl Default for ConvergentProcessor {
    fn default() -> Self {
        Self::new(&ProcessingConfig::default())
    }
}

#[async_trait]
impl ThoughtProcessor for ConvergentProcessor {
    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        self.analyze(input)
    }

    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Convergent
    }
}
