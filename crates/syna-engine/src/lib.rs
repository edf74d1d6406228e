#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Syna Engine Library
//!
//! Picks a processing mode for each thought and runs it. Bilateral mode runs
//! the divergent and convergent processors concurrently and merges their
//! results through the [`CorpusCallosum`].

pub mod bilateral;
pub mod callosum;
pub mod engine;
pub mod selector;

mod proptests;

pub use bilateral::BilateralProcessor;
pub use callosum::{ConflictResolver, CorpusCallosum, PatternIntegrator, Resolution, Synergy};
pub use engine::{EnhancedSyna, ThoughtOutput};
pub use selector::{ModeSelector, TaskOptimizer};

// Re-export core types
pub use syna_core::{Error, Result};
