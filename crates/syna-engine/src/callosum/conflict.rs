//! Settling disagreement between the two modes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use syna_core::{ProcessingMode, ProcessingResult};
use syna_processors::divergent::association_terms;

/// Outcome of conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Mode that wins the conflict, `None` if there was no conflict
    pub dominant: Option<ProcessingMode>,

    /// Divergent insights dropped as off-focus
    pub discarded: Vec<String>,
}

impl Resolution {
    /// Returns `true` if the two results were in conflict.
    pub fn is_conflict(&self) -> bool {
        self.dominant.is_some()
    }
}

/// Decides which mode to trust when their confidences disagree.
#[derive(Debug, Clone, Copy)]
pub struct ConflictResolver {
    tolerance: f64,
}

impl ConflictResolver {
    /// Creates a resolver that tolerates confidence gaps up to `tolerance`.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Resolves a conflict between divergent and convergent results.
    ///
    /// A gap within tolerance is not a conflict. Otherwise the more confident
    /// side dominates; a dominant convergent side discards the divergent
    /// associations that share no term with its focus.
    pub fn resolve(&self, divergent: &ProcessingResult, convergent: &ProcessingResult) -> Resolution {
        let gap = (divergent.confidence - convergent.confidence).abs();
        if gap <= self.tolerance {
            return Resolution::default();
        }

        let dominant = if convergent.confidence > divergent.confidence {
            ProcessingMode::Convergent
        } else {
            ProcessingMode::Divergent
        };

        let discarded = match dominant {
            ProcessingMode::Convergent => {
                let focus: HashSet<&str> = convergent.insights.iter().map(String::as_str).collect();
                divergent
                    .insights
                    .iter()
                    // Bare terms are not associations and always survive
                    .filter(|insight| {
                        association_terms(insight)
                            .is_some_and(|(a, b)| !focus.contains(a) && !focus.contains(b))
                    })
                    .cloned()
                    .collect()
            }
            _ => Vec::new(),
        };

        tracing::warn!(
            dominant = %dominant,
            gap,
            discarded = discarded.len(),
            "Divergent and convergent confidence conflict"
        );

        Resolution {
            dominant: Some(dominant),
            discarded,
        }
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new(syna_core::IntegrationConfig::default().conflict_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mode: ProcessingMode, insights: &[&str], confidence: f64) -> ProcessingResult {
        ProcessingResult::new(
            mode,
            insights.iter().map(|s| s.to_string()).collect(),
            confidence,
            Vec::new(),
            0.0,
            0.0,
        )
    }

    #[test]
    fn test_no_conflict_within_tolerance() {
        let d = result(ProcessingMode::Divergent, &["castle~dragon"], 0.5);
        let c = result(ProcessingMode::Convergent, &["knight"], 0.7);
        let resolution = ConflictResolver::new(0.3).resolve(&d, &c);
        assert!(!resolution.is_conflict());
        assert!(resolution.discarded.is_empty());
    }

    #[test]
    fn test_convergent_dominance_discards_tangents() {
        let d = result(
            ProcessingMode::Divergent,
            &["castle~dragon", "moat~tower", "knight"],
            0.2,
        );
        let c = result(ProcessingMode::Convergent, &["dragon", "knight"], 0.9);

        let resolution = ConflictResolver::new(0.3).resolve(&d, &c);
        assert_eq!(resolution.dominant, Some(ProcessingMode::Convergent));
        assert_eq!(resolution.discarded, vec!["moat~tower".to_string()]);
    }

    #[test]
    fn test_convergent_dominance_keeps_bare_terms() {
        let d = result(ProcessingMode::Divergent, &["nebula", "moat~tower"], 0.1);
        let c = result(ProcessingMode::Convergent, &["dragon"], 0.9);

        let resolution = ConflictResolver::new(0.3).resolve(&d, &c);
        assert_eq!(resolution.dominant, Some(ProcessingMode::Convergent));
        assert_eq!(resolution.discarded, vec!["moat~tower".to_string()]);
    }

    #[test]
    fn test_divergent_dominance_keeps_everything() {
        let d = result(ProcessingMode::Divergent, &["moat~tower"], 0.8);
        let c = result(ProcessingMode::Convergent, &["dragon"], 0.1);

        let resolution = ConflictResolver::new(0.3).resolve(&d, &c);
        assert_eq!(resolution.dominant, Some(ProcessingMode::Divergent));
        assert!(resolution.discarded.is_empty());
    }
}
