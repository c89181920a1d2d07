//! Layered error types

use resalta_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Mode identifier not present in the registry
    #[error("mode '{code}' not recognized")]
    UnknownMode {
        /// The mode code that failed to resolve
        code: String,
    },

    /// A mode profile failed validation
    #[error("invalid mode profile: {reason}")]
    InvalidProfile {
        /// Why the profile was rejected
        reason: String,
    },

    /// A mode profile failed to parse
    #[error("malformed mode profile: {0}")]
    MalformedProfile(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
