//! Analysis orchestration for dyslexia-pattern highlighting
//!
//! This crate ties the core algorithms together: it owns the mode registry
//! (which patterns, colors, and trigger letters each mode uses), the engine
//! configuration, and the `Analyzer` pipeline that turns a text buffer plus a
//! mode code into resolved styled spans.

#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod modes;
pub mod profile;

// Re-export key types
pub use analyzer::{Analysis, AnalysisMetadata, Analyzer, AnalyzerBuilder};
pub use config::{EngineConfig, COMPACT_WINDOW_GAP, DEFAULT_WINDOW_GAP};
pub use error::{EngineError, Result};
pub use modes::{available_modes, get_rules, ModeRules};
pub use profile::ModeProfile;

// Re-export from core for convenience
pub use resalta_core::{Interval, IntervalKind, PatternConfig, StyleId, StyledSpan};
