//! High-level configuration API

use crate::error::{ApiError, Result};
use resalta_engine::EngineConfig;

/// High-level configuration for text analysis
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) inner: EngineConfig,
    pub(crate) mode: String,
}

impl Default for Config {
    fn default() -> Self {
        // "mirror" is the documented default mode; any other code must exist
        // in the registry or analysis fails with UnknownMode.
        Self {
            inner: EngineConfig::default(),
            mode: "mirror".to_string(),
        }
    }
}

impl Config {
    /// Plain-text analysis: compact confusion window, no break marks
    pub fn plain() -> Self {
        Self {
            inner: EngineConfig::plain(),
            mode: "mirror".to_string(),
        }
    }

    /// Full analysis with every annotation layer (the default)
    pub fn rich() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured mode code
    pub fn mode(&self) -> &str {
        &self.mode
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the mode code
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.config.mode = mode.into();
        self
    }

    /// Set the confusion window gap
    pub fn window_gap(mut self, gap: usize) -> Self {
        self.config.inner.window_gap = gap;
        self
    }

    /// Enable or disable syllable break marks
    pub fn syllable_marks(mut self, enabled: bool) -> Self {
        self.config.inner.syllable_marks = enabled;
        self
    }

    /// Use the plain-text preset
    pub fn plain(mut self) -> Self {
        self.config.inner = EngineConfig::plain();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.mode.is_empty() {
            return Err(ApiError::Config("mode code required".to_string()));
        }
        if self.config.inner.window_gap == 0 {
            return Err(ApiError::Config(
                "window gap must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}
