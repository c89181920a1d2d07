//! Public API for resalta dyslexia-friendly text highlighting
//!
//! This crate provides a clean, stable interface over the analysis engine:
//! hand it a text buffer and a mode code, get back an ordered list of styled
//! spans (plus syllable break positions) for a presentation layer to paint.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{Metadata, SpanDTO};
use error::Result;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output, Span};
pub use error::ApiError;

/// Main entry point for text analysis
///
/// Wraps the engine behind a stable surface. One instance can serve any
/// number of callers: each analysis call owns its buffers, so no locking is
/// involved anywhere.
pub struct TextAnalyzer {
    inner: Arc<resalta_engine::Analyzer>,
    config: Config,
}

impl TextAnalyzer {
    /// Create an analyzer with default configuration (mode `mirror`,
    /// full annotation layers)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer for a specific registered mode
    pub fn with_mode(mode: &str) -> Result<Self> {
        let config = Config::builder().mode(mode).build()?;
        Self::with_config(config)
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        // Resolve the mode up front so a bad code fails here, not per call
        resalta_engine::get_rules(&config.mode).map_err(ApiError::from)?;

        let inner = resalta_engine::Analyzer::with_config(config.inner.clone());

        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Analyze input and return resolved spans with metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let text_len = text.len();
        let char_count = text.chars().count();

        let analysis = self
            .inner
            .analyze(&text, &self.config.mode)
            .map_err(ApiError::from)?;

        let elapsed = start.elapsed();

        let spans = analysis
            .spans
            .into_iter()
            .map(|s| SpanDTO {
                start: s.start,
                length: s.length,
                is_background: s.is_background,
                style: s.style.raw(),
            })
            .collect();

        let metadata = Metadata {
            total_bytes: text_len,
            total_chars: char_count,
            processing_time_ms: elapsed.as_millis() as u64,
            mode_used: analysis.metadata.mode,
            pattern_matches: analysis.metadata.pattern_matches,
            confusion_zones: analysis.metadata.confusion_zones,
        };

        Ok(Output {
            spans,
            breaks: analysis.breaks,
            metadata,
        })
    }

    /// Analyze a text string directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Analyze text with the default configuration
pub fn analyze_text(text: &str) -> Result<Output> {
    let analyzer = TextAnalyzer::new()?;
    analyzer.process(Input::from_text(text))
}

/// Analyze text with a specific registered mode
pub fn analyze_text_with_mode(text: &str, mode: &str) -> Result<Output> {
    let analyzer = TextAnalyzer::with_mode(mode)?;
    analyzer.process(Input::from_text(text))
}

/// Analyze a file with the default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let analyzer = TextAnalyzer::new()?;
    analyzer.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Codes of every registered mode, including aliases
pub fn available_modes() -> Vec<String> {
    resalta_engine::available_modes()
}
