//! Property-based tests for integration and mode selection.
