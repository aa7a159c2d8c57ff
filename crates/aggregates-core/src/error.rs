//! Error types for generic aggregates
//!
//! Capability violations never reach this type: they are rejected by trait
//! bounds at build time. The only runtime failure is empty input to
//! `max_element`.

use thiserror::Error;

/// Core error type for aggregate operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation has no defined result for an empty input
    #[error("Empty input: {operation} requires at least one element")]
    EmptyInput { operation: &'static str },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}
