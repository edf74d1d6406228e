//! Integration of divergent and convergent results.
//!
//! The corpus callosum combines the two single-mode results of a bilateral
//! run into one:
//!
//! 1. [`PatternIntegrator`] finds synergies, convergent focus terms that also
//!    anchor divergent associations.
//! 2. [`ConflictResolver`] decides whether one side should dominate and which
//!    divergent tangents to drop.
//! 3. Insights, confidence, path, usage and novelty are merged.

mod conflict;
mod pattern;

pub use conflict::{ConflictResolver, Resolution};
pub use pattern::{PatternIntegrator, Synergy};

use std::collections::HashSet;
use syna_core::{IntegrationConfig, ProcessingMode, ProcessingResult};

/// Confidence bonus per unit of synergy ratio, once over the threshold.
const SYNERGY_CONFIDENCE_BONUS: f64 = 0.2;

/// Novelty bonus per unit of synergy ratio.
const SYNERGY_NOVELTY_BONUS: f64 = 0.1;

/// Final stage name of an integrated result.
const INTEGRATE_STAGE: &str = "integrate";

/// Handles information exchange between the two processing modes.
#[derive(Debug, Clone)]
pub struct CorpusCallosum {
    synergy_threshold: f64,
    max_insights: usize,
    conflict_resolver: ConflictResolver,
    pattern_integrator: PatternIntegrator,
}

impl CorpusCallosum {
    /// Creates a corpus callosum.
    ///
    /// `max_insights` is the per-processor cap; merged output holds at most
    /// twice as many.
    pub fn new(config: &IntegrationConfig, max_insights: usize) -> Self {
        Self {
            synergy_threshold: config.synergy_threshold,
            max_insights,
            conflict_resolver: ConflictResolver::new(config.conflict_tolerance),
            pattern_integrator: PatternIntegrator::new(),
        }
    }

    /// Combines insights from both processing modes.
    pub fn integrate_results(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
    ) -> ProcessingResult {
        let synergies = self.pattern_integrator.find_synergies(divergent, convergent);
        let resolution = self.conflict_resolver.resolve(divergent, convergent);

        let ratio = if convergent.insights.is_empty() {
            0.0
        } else {
            synergies.len() as f64 / convergent.insights.len() as f64
        };

        tracing::debug!(
            synergies = synergies.len(),
            synergy_ratio = ratio,
            conflict = resolution.is_conflict(),
            "Integrating bilateral results"
        );

        ProcessingResult::new(
            ProcessingMode::Bilateral,
            self.merge_insights(divergent, convergent, &synergies, &resolution),
            self.calculate_confidence(divergent, convergent, ratio, &resolution),
            combine_paths(&divergent.processing_path, &convergent.processing_path),
            divergent.resource_usage + convergent.resource_usage,
            divergent.novelty_score.max(convergent.novelty_score) + SYNERGY_NOVELTY_BONUS * ratio,
        )
    }

    fn merge_insights(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergies: &[Synergy],
        resolution: &Resolution,
    ) -> Vec<String> {
        let discarded: HashSet<&str> = resolution.discarded.iter().map(String::as_str).collect();

        let synergy_insights = synergies.iter().flat_map(|synergy| {
            synergy
                .associations
                .iter()
                .map(move |assoc| format!("{}: {assoc}", synergy.term))
        });
        let divergent_insights = divergent
            .insights
            .iter()
            .filter(|insight| !discarded.contains(insight.as_str()))
            .cloned();

        let mut seen = HashSet::new();
        synergy_insights
            .chain(convergent.insights.iter().cloned())
            .chain(divergent_insights)
            .filter(|insight| seen.insert(insight.clone()))
            .take(2 * self.max_insights)
            .collect()
    }

    fn calculate_confidence(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergy_ratio: f64,
        resolution: &Resolution,
    ) -> f64 {
        let base = match resolution.dominant {
            Some(ProcessingMode::Divergent) => divergent.confidence,
            Some(ProcessingMode::Convergent) => convergent.confidence,
            _ => (divergent.confidence + convergent.confidence) / 2.0,
        };

        if synergy_ratio > 0.0 && synergy_ratio >= self.synergy_threshold {
            base + SYNERGY_CONFIDENCE_BONUS * synergy_ratio
        } else {
            base
        }
    }
}

impl Default for CorpusCallosum {
    fn default() -> Self {
        Self::new(
            &IntegrationConfig::default(),
            syna_core::ProcessingConfig::default().max_insights,
        )
    }
}

/// Divergent stages, then convergent stages, then the integration stage.
fn combine_paths(divergent: &[String], convergent: &[String]) -> Vec<String> {
    divergent
        .iter()
        .map(|stage| format!("divergent:{stage}"))
        .chain(convergent.iter().map(|stage| format!("convergent:{stage}")))
        .chain(std::iter::once(INTEGRATE_STAGE.to_string()))
        .collect()
}
