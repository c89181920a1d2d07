//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An empty pattern string was handed to the matcher
    #[error("empty pattern cannot be searched")]
    EmptyPattern,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
