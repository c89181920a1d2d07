//! Mode registry
//!
//! Holds the runtime form of mode profiles and the embedded builtin modes,
//! loaded once on first access. Mode selection is a table lookup by code, so
//! supporting a new mode is a data change with no new branches anywhere.

use crate::error::{EngineError, Result};
use crate::profile::ModeProfile;
use resalta_core::{PatternConfig, StyleId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Runtime form of a validated mode profile
#[derive(Debug, Clone)]
pub struct ModeRules {
    /// Registry lookup code
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// Ordered, case-normalized pattern table
    pub patterns: Vec<PatternConfig>,
    /// Case-normalized trigger characters
    pub triggers: Vec<char>,
    /// Background style for confusion zones
    pub confusion_style: StyleId,
    /// Per-profile gap override
    pub window_gap: Option<usize>,
    /// Whether this mode wants syllable marks
    pub syllables: bool,
}

impl ModeRules {
    /// Build runtime rules from a validated profile.
    ///
    /// Pattern strings and triggers are normalized to ASCII lowercase here;
    /// the matcher assumes it.
    pub fn from_config(profile: &ModeProfile) -> Result<Self> {
        profile
            .validate()
            .map_err(|reason| EngineError::InvalidProfile { reason })?;

        Ok(Self {
            code: profile.metadata.code.clone(),
            name: profile.metadata.name.clone(),
            patterns: profile
                .patterns
                .iter()
                .map(|entry| {
                    PatternConfig::new(&entry.pattern, StyleId::new(entry.style), entry.priority)
                })
                .collect(),
            triggers: profile
                .confusion
                .triggers
                .iter()
                .map(|ch| ch.to_ascii_lowercase())
                .collect(),
            confusion_style: StyleId::new(profile.confusion.style),
            window_gap: profile.confusion.window_gap,
            syllables: profile.syllables.enabled,
        })
    }
}

/// Embedded mode profiles
static EMBEDDED: OnceLock<HashMap<String, Arc<ModeRules>>> = OnceLock::new();

/// Look up mode rules by code
pub fn get_rules(code: &str) -> Result<Arc<ModeRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded_mode(include_str!("../configs/modes/mirror.toml")) {
            Ok(rules) => {
                map.insert("mirror".to_string(), Arc::clone(&rules));
                map.insert("visual".to_string(), rules);
            }
            Err(e) => {
                tracing::warn!("failed to load builtin 'mirror' profile: {e}");
            }
        }

        match load_embedded_mode(include_str!("../configs/modes/phonetic.toml")) {
            Ok(rules) => {
                map.insert("phonetic".to_string(), rules);
            }
            Err(e) => {
                tracing::warn!("failed to load builtin 'phonetic' profile: {e}");
            }
        }

        map
    });

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| EngineError::UnknownMode {
            code: code.to_string(),
        })
}

/// Codes of every registered builtin mode, including aliases
pub fn available_modes() -> Vec<String> {
    // force initialization through the same path as get_rules
    let _ = get_rules("mirror");
    let mut codes: Vec<String> = EMBEDDED
        .get()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    codes.sort();
    codes
}

fn load_embedded_mode(toml_str: &str) -> Result<Arc<ModeRules>> {
    let profile: ModeProfile =
        toml::from_str(toml_str).map_err(|e| EngineError::MalformedProfile(e.to_string()))?;
    Ok(Arc::new(ModeRules::from_config(&profile)?))
}
