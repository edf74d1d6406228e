#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Syna Processors Library
//!
//! The two single-mode processors and the text analysis they share:
//!
//! - [`ConvergentProcessor`] narrows a thought to its most frequent terms.
//! - [`DivergentProcessor`] spreads a thought into co-occurring term pairs.

pub mod convergent;
pub mod divergent;
pub mod text;

mod proptests;

pub use convergent::ConvergentProcessor;
pub use divergent::DivergentProcessor;
pub use text::TextAnalyzer;

// Re-export core types
pub use syna_core::{Error, Result};
