//! Analysis pipeline
//!
//! Runs the four core stages in order (match, detect, segment, resolve) for
//! one text buffer and one mode. An `Analyzer` holds nothing but
//! configuration: every call allocates its own interval lists and paint
//! buffer, so one instance can serve any number of callers concurrently.

use crate::{
    config::EngineConfig,
    error::Result,
    modes::{self, ModeRules},
};
use resalta_core::{confusion, kmp, resolver, syllable, Interval, StyledSpan};
use std::time::Instant;

/// Analysis pipeline entry point
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

/// Output of one analysis call
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Resolved styled spans, ordered by `(start, is_background)`
    pub spans: Vec<StyledSpan>,
    /// Syllable break positions, ascending
    pub breaks: Vec<usize>,
    /// Counts and timing for the call
    pub metadata: AnalysisMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Mode code the analysis ran with
    pub mode: String,
    /// Raw pattern matches before overlap resolution
    pub pattern_matches: usize,
    /// Confusion zones before merging
    pub confusion_zones: usize,
    /// Syllable break marks emitted
    pub break_points: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Analyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze `text` under the mode registered as `mode`
    pub fn analyze(&self, text: &str, mode: &str) -> Result<Analysis> {
        let rules = modes::get_rules(mode)?;
        self.analyze_with_rules(text, &rules)
    }

    /// Analyze `text` under explicit rules (custom, unregistered modes)
    pub fn analyze_with_rules(&self, text: &str, rules: &ModeRules) -> Result<Analysis> {
        let started = Instant::now();

        if text.is_empty() {
            return Ok(Analysis {
                spans: Vec::new(),
                breaks: Vec::new(),
                metadata: AnalysisMetadata {
                    mode: rules.code.clone(),
                    pattern_matches: 0,
                    confusion_zones: 0,
                    break_points: 0,
                    processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                },
            });
        }

        let mut intervals: Vec<Interval> = Vec::new();

        let mut pattern_matches = 0;
        for cfg in &rules.patterns {
            let starts = kmp::find_all(text, &cfg.pattern)?;
            pattern_matches += starts.len();
            intervals.extend(starts.into_iter().map(|start| {
                Interval::pattern(start, start + cfg.pattern.len(), cfg.style, cfg.priority)
            }));
        }
        tracing::trace!(mode = %rules.code, matches = pattern_matches, "pattern search done");

        let gap = rules.window_gap.unwrap_or(self.config.window_gap);
        let zones = confusion::detect_zones(text, &rules.triggers, gap, rules.confusion_style);
        let confusion_zones = zones.len();
        intervals.extend(zones);

        if self.config.syllable_marks && rules.syllables {
            intervals.extend(syllable::break_points(text));
        }

        let resolution = resolver::resolve(text.len(), &intervals);
        let break_points = resolution.breaks.len();

        tracing::debug!(
            mode = %rules.code,
            matches = pattern_matches,
            zones = confusion_zones,
            breaks = break_points,
            spans = resolution.spans.len(),
            "analysis complete"
        );

        Ok(Analysis {
            spans: resolution.spans,
            breaks: resolution.breaks,
            metadata: AnalysisMetadata {
                mode: rules.code.clone(),
                pattern_matches,
                confusion_zones,
                break_points,
                processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }
}

/// Builder for [`Analyzer`]
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    config: EngineConfig,
}

impl AnalyzerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confusion window gap
    pub fn window_gap(mut self, gap: usize) -> Self {
        self.config.window_gap = gap;
        self
    }

    /// Enable or disable syllable break marks
    pub fn syllable_marks(mut self, enabled: bool) -> Self {
        self.config.syllable_marks = enabled;
        self
    }

    /// Use the plain-text preset
    pub fn plain(mut self) -> Self {
        self.config = EngineConfig::plain();
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Analyzer {
        Analyzer::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_empty_analysis() {
        let analysis = Analyzer::new().analyze("", "mirror").unwrap();
        assert!(analysis.spans.is_empty());
        assert!(analysis.breaks.is_empty());
        assert_eq!(analysis.metadata.pattern_matches, 0);
    }

    #[test]
    fn builder_applies_settings() {
        let analyzer = AnalyzerBuilder::new()
            .window_gap(3)
            .syllable_marks(false)
            .build();
        assert_eq!(analyzer.config().window_gap, 3);
        assert!(!analyzer.config().syllable_marks);
    }

    #[test]
    fn plain_preset_emits_no_breaks() {
        let analyzer = AnalyzerBuilder::new().plain().build();
        let analysis = analyzer
            .analyze("palabras larguisimas aqui", "mirror")
            .unwrap();
        assert!(analysis.breaks.is_empty());
    }
}
