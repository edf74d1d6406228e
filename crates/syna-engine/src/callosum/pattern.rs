//! Finding where the two modes agree.

use serde::{Deserialize, Serialize};
use syna_core::ProcessingResult;
use syna_processors::divergent::association_terms;

/// A convergent focus term that also anchors divergent associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synergy {
    /// The shared term
    pub term: String,

    /// Divergent associations containing the term, in divergent order
    pub associations: Vec<String>,
}

/// Looks for complementary patterns between divergent and convergent output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternIntegrator;

impl PatternIntegrator {
    /// Creates a pattern integrator.
    pub fn new() -> Self {
        Self
    }

    /// One synergy per convergent insight that is a side of some divergent
    /// association, in convergent order.
    pub fn find_synergies(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
    ) -> Vec<Synergy> {
        convergent
            .insights
            .iter()
            .filter_map(|term| {
                let associations: Vec<String> = divergent
                    .insights
                    .iter()
                    .filter(|insight| {
                        association_terms(insight)
                            .is_some_and(|(a, b)| a == term.as_str() || b == term.as_str())
                    })
                    .cloned()
                    .collect();

                (!associations.is_empty()).then(|| Synergy {
                    term: term.clone(),
                    associations,
                })
            })
            .collect()
    }
}
