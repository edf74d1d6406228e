//! Divergent processing: spread a thought into associations.

use async_trait::async_trait;
use std::collections::BTreeSet;
use syna_core::{Error, ProcessingConfig, ProcessingMode, ProcessingResult, Result, ThoughtProcessor};

use crate::text::{TextAnalyzer, rank};

/// Ceiling on divergent confidence; associations are never certain.
const CONFIDENCE_CEILING: f64 = 0.8;

/// Separator between the two terms of an association insight.
pub const ASSOCIATION_SEPARATOR: char = '~';

/// Stages a divergent result reports.
const PATH: [&str; 4] = ["tokenize", "filter", "associate", "diverge"];

/// Pairs content terms that appear close together.
///
/// Each insight is an association `a~b` with `a < b`. Novelty measures how
/// much of the possible association space the thought actually touches.
#[derive(Debug)]
pub struct DivergentProcessor {
    analyzer: TextAnalyzer,
    max_insights: usize,
    window: usize,
}

impl DivergentProcessor {
    /// Creates a divergent processor.
    pub fn new(config: &ProcessingConfig) -> Self {
        Self {
            analyzer: TextAnalyzer::new(config),
            max_insights: config.max_insights,
            window: config.cooccurrence_window,
        }
    }

    /// Runs the association pass synchronously.
    pub fn analyze(&self, input: &str) -> Result<ProcessingResult> {
        let tokens = self.analyzer.tokenize(input);
        if tokens.is_empty() {
            return Err(Error::validation_field("input", "contains no words"));
        }
        let token_count = tokens.len();
        let terms = self.analyzer.filter_tokens(tokens);

        let distinct: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
        let pairs = self.analyzer.cooccurrences(&terms, self.window);
        let pair_count = pairs.len();

        let insights: Vec<String> = if distinct.len() == 1 {
            // Nothing to associate with; the lone term is the whole thought
            distinct.iter().map(|t| t.to_string()).collect()
        } else {
            rank(pairs)
                .into_iter()
                .take(self.max_insights)
                .map(|((a, b), _)| format!("{a}{ASSOCIATION_SEPARATOR}{b}"))
                .collect()
        };

        let n = distinct.len() as f64;
        let possible = n * (n - 1.0) / 2.0;
        let novelty = if possible > 0.0 {
            pair_count as f64 / possible
        } else {
            0.0
        };
        let confidence = CONFIDENCE_CEILING * insights.len() as f64 / self.max_insights as f64;

        tracing::debug!(
            tokens = token_count,
            distinct = distinct.len(),
            pairs = pair_count,
            novelty,
            "Divergent analysis complete"
        );

        Ok(ProcessingResult::new(
            ProcessingMode::Divergent,
            insights,
            confidence,
            PATH.iter().map(|s| s.to_string()).collect(),
            token_count as f64 * self.window as f64,
            novelty,
        ))
    }
}

impl Default for DivergentProcessor {
    fn default() -> Self {
        Self::new(&ProcessingConfig::default())
    }
}

#[async_trait]
impl ThoughtProcessor for DivergentProcessor {
    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        self.analyze(input)
    }

    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Divergent
    }
}

/// Splits an association insight into its two terms.
///
/// Returns `None` for insights that are not associations.
pub fn association_terms(insight: &str) -> Option<(&str, &str)> {
    insight.split_once(ASSOCIATION_SEPARATOR)
}
