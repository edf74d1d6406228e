//! Error types for the Syna core library.

use crate::types::ProcessingMode;

/// Errors that can occur while processing thoughts or driving the network.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input or configuration value failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A processor exceeded its time budget
    #[error("Processing timed out after {millis}ms")]
    Timeout {
        /// Budget that was exceeded, in milliseconds
        millis: u64,
    },

    /// A processor task failed
    #[error("{mode} processor failed: {message}")]
    Processor {
        /// Mode of the processor that failed
        mode: ProcessingMode,
        /// Human-readable error message
        message: String,
    },

    /// Signal vector length does not match the network size
    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch {
        /// Number of synapses in the network
        expected: usize,
        /// Length of the supplied vector
        actual: usize,
    },
}

/// Convenience `Result` type alias for Syna operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors are transient: I/O hiccups, timeouts and failed
    /// processor tasks. Bad input stays bad on a second attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Timeout { .. } => true,
            Error::Processor { .. } => true,
            Error::Validation { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
            Error::DimensionMismatch { .. } => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new processor error for the given mode.
    pub fn processor<S: Into<String>>(mode: ProcessingMode, message: S) -> Self {
        Error::Processor {
            mode,
            message: message.into(),
        }
    }
}
