#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Syna Core Library
//!
//! Core types, errors, configuration and the processor trait shared by the
//! Syna processing crates.

pub mod config;
pub mod error;
pub mod processor;
pub mod types;

// Re-exports for convenience
pub use config::{IntegrationConfig, NetworkConfig, ProcessingConfig, SelectionConfig, SynaConfig};
pub use error::{Error, Result};
pub use processor::ThoughtProcessor;
pub use types::{ProcessingMode, ProcessingResult, TaskProfile, ThoughtId, ThoughtMetadata};
