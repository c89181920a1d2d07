//! Mode profile schema and validation
//!
//! Defines the TOML schema for highlighting mode profiles. A profile is pure
//! data: an ordered pattern table, a trigger set for confusion detection, and
//! a syllable toggle. Adding a mode means adding a profile, not code.

use resalta_core::CONFUSION_PRIORITY;
use serde::{Deserialize, Serialize};

/// Root mode profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Identifying metadata
    pub metadata: Metadata,
    /// Ordered pattern table; order is the tie-break order in the resolver
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
    /// Confusion-zone configuration
    pub confusion: ConfusionSection,
    /// Syllable-mark configuration
    #[serde(default)]
    pub syllables: SyllableSection,
}

/// Mode metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Registry lookup code
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// One row of the pattern table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Substring to search for (case-insensitive)
    pub pattern: String,
    /// Opaque style token for its matches
    pub style: u32,
    /// Overlap-resolution priority
    pub priority: u8,
}

/// Confusion-zone configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionSection {
    /// Characters whose proximity flags a zone
    pub triggers: Vec<char>,
    /// Background style token for zones
    pub style: u32,
    /// Per-profile gap override; falls back to the engine config when absent
    #[serde(default)]
    pub window_gap: Option<usize>,
}

/// Syllable-mark configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllableSection {
    /// Whether this mode wants break marks at all
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SyllableSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

impl ModeProfile {
    /// Validate the profile before it enters the registry
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("mode code must not be empty".to_string());
        }

        for entry in &self.patterns {
            if entry.pattern.is_empty() {
                return Err(format!(
                    "mode '{}' contains an empty pattern",
                    self.metadata.code
                ));
            }
            if entry.priority >= CONFUSION_PRIORITY {
                return Err(format!(
                    "pattern '{}' priority {} collides with the confusion layer (max {})",
                    entry.pattern,
                    entry.priority,
                    CONFUSION_PRIORITY - 1
                ));
            }
        }

        if self.confusion.triggers.is_empty() {
            return Err(format!(
                "mode '{}' defines no trigger characters",
                self.metadata.code
            ));
        }
        if self.confusion.window_gap == Some(0) {
            return Err("confusion window gap must be at least 1".to_string());
        }

        Ok(())
    }
}
