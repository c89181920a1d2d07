//! Core pattern-matching and interval-resolution engine
//!
//! This crate holds the deterministic heart of resalta: exact multi-pattern
//! substring search (KMP), detection of dense clusters of confusable letters,
//! heuristic syllable-break segmentation, and the priority-based merge that
//! folds all three annotation streams into a single ordered list of styled
//! spans. No I/O, no configuration parsing, no shared state: one analysis is
//! a pure function of its inputs and owns every buffer it allocates.

#![warn(missing_docs)]

pub mod confusion;
pub mod error;
pub mod kmp;
pub mod resolver;
pub mod syllable;
pub mod types;

// Re-export key types
pub use error::{CoreError, Result};
pub use types::{
    Interval, IntervalKind, PatternConfig, Resolution, StyleId, StyledSpan, CONFUSION_PRIORITY,
};
