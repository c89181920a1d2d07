//! Configuration types for the engine

/// Default confusion window gap: the richer, display-oriented analysis.
pub const DEFAULT_WINDOW_GAP: usize = 6;

/// Tighter gap used by the plain-text analysis preset.
pub const COMPACT_WINDOW_GAP: usize = 5;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum distance (exclusive) between adjacent triggers that still
    /// forms a confusion zone; profiles may override it per mode
    pub window_gap: usize,
    /// Whether analyses emit syllable break marks at all
    pub syllable_marks: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_gap: DEFAULT_WINDOW_GAP,
            syllable_marks: true,
        }
    }
}

impl EngineConfig {
    /// Plain-text analysis: compact window, no break marks
    pub fn plain() -> Self {
        Self {
            window_gap: COMPACT_WINDOW_GAP,
            syllable_marks: false,
        }
    }

    /// Full analysis with every annotation layer (the default)
    pub fn rich() -> Self {
        Self::default()
    }
}
