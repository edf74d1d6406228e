//! Property-based tests for the processors.
