//! Task profiling and mode selection.

use std::collections::HashSet;
use syna_core::{ProcessingMode, SelectionConfig, TaskProfile};
use syna_processors::TextAnalyzer;

/// Words that ask for new associations.
const CREATIVITY_CUES: &[&str] = &[
    "imagine",
    "create",
    "invent",
    "design",
    "brainstorm",
    "story",
    "idea",
    "ideas",
    "novel",
    "poem",
    "dream",
    "explore",
    "alternative",
    "alternatives",
    "possibilities",
    "compose",
];

/// Words that ask for focused analysis.
const ANALYSIS_CUES: &[&str] = &[
    "analyze",
    "analyse",
    "calculate",
    "compare",
    "measure",
    "evaluate",
    "prove",
    "explain",
    "why",
    "how",
    "data",
    "statistics",
    "logic",
    "derive",
    "verify",
    "count",
    "sum",
    "average",
];

/// Score contributed by each cue word.
const CUE_WEIGHT: f64 = 0.35;

/// Distinct content terms at which lexical complexity saturates.
const TERM_SATURATION: f64 = 40.0;

/// Sentences at which structural complexity saturates.
const SENTENCE_SATURATION: f64 = 5.0;

/// Maps task characteristics to a processing mode.
#[derive(Debug, Clone, Copy)]
pub struct TaskOptimizer {
    integration_threshold: f64,
}

impl TaskOptimizer {
    /// Creates an optimizer with the given bilateral threshold.
    pub fn new(integration_threshold: f64) -> Self {
        Self {
            integration_threshold,
        }
    }

    /// Determine the optimal processing mode for a task.
    ///
    /// Bilateral when both creativity and analysis strictly exceed the
    /// threshold, divergent when creativity outweighs analysis, convergent
    /// otherwise. Complexity does not enter the decision.
    pub fn optimize_processing(
        &self,
        _complexity: f64,
        creativity_required: f64,
        analysis_required: f64,
    ) -> ProcessingMode {
        if creativity_required > self.integration_threshold
            && analysis_required > self.integration_threshold
        {
            ProcessingMode::Bilateral
        } else if creativity_required > analysis_required {
            ProcessingMode::Divergent
        } else {
            ProcessingMode::Convergent
        }
    }
}

impl Default for TaskOptimizer {
    fn default() -> Self {
        Self::new(SelectionConfig::default().integration_threshold)
    }
}

/// Profiles inputs and picks a mode for them.
#[derive(Debug)]
pub struct ModeSelector {
    analyzer: TextAnalyzer,
    optimizer: TaskOptimizer,
    creativity_cues: HashSet<&'static str>,
    analysis_cues: HashSet<&'static str>,
}

impl ModeSelector {
    /// Creates a mode selector.
    pub fn new(config: &SelectionConfig, analyzer: TextAnalyzer) -> Self {
        Self {
            analyzer,
            optimizer: TaskOptimizer::new(config.integration_threshold),
            creativity_cues: CREATIVITY_CUES.iter().copied().collect(),
            analysis_cues: ANALYSIS_CUES.iter().copied().collect(),
        }
    }

    /// Analyze input characteristics.
    ///
    /// Cue words are matched on raw tokens so stopwords like "why" and "how"
    /// still count. The phrase "what if" counts as one creativity cue.
    pub fn analyze_task(&self, input: &str) -> TaskProfile {
        let tokens = self.analyzer.tokenize(input);

        let mut creative_hits = tokens
            .iter()
            .filter(|t| self.creativity_cues.contains(t.as_str()))
            .count();
        creative_hits += tokens
            .windows(2)
            .filter(|pair| pair[0] == "what" && pair[1] == "if")
            .count();
        let analysis_hits = tokens
            .iter()
            .filter(|t| self.analysis_cues.contains(t.as_str()))
            .count();

        let distinct_terms: HashSet<String> =
            self.analyzer.filter_tokens(tokens).into_iter().collect();
        let sentences = count_sentences(input);

        let complexity = 0.5 * (distinct_terms.len() as f64 / TERM_SATURATION).min(1.0)
            + 0.5 * (sentences as f64 / SENTENCE_SATURATION).min(1.0);

        let profile = TaskProfile::new(
            complexity,
            CUE_WEIGHT * creative_hits as f64,
            CUE_WEIGHT * analysis_hits as f64,
        );

        tracing::debug!(
            creative_hits,
            analysis_hits,
            sentences,
            complexity = profile.complexity,
            "Task analyzed"
        );

        profile
    }

    /// Select the processing mode for a profile.
    pub fn select_mode(&self, profile: &TaskProfile) -> ProcessingMode {
        self.optimizer.optimize_processing(
            profile.complexity,
            profile.creativity_required,
            profile.analysis_required,
        )
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(&SelectionConfig::default(), TextAnalyzer::default())
    }
}

/// Sentences are runs of text ended by `.`, `!` or `?`; trailing text without
/// a terminator still counts as one.
fn count_sentences(input: &str) -> usize {
    input
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}
