//! Basic tests for resalta-engine

use resalta_engine::*;

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.window_gap, DEFAULT_WINDOW_GAP);

    let plain = EngineConfig::plain();
    assert_eq!(plain.window_gap, COMPACT_WINDOW_GAP);
    assert!(!plain.syllable_marks);
}

#[test]
fn test_unknown_mode_propagates() {
    let analyzer = Analyzer::new();
    match analyzer.analyze("texto", "klingon") {
        Err(EngineError::UnknownMode { code }) => assert_eq!(code, "klingon"),
        other => panic!("expected UnknownMode, got {other:?}"),
    }
}

#[test]
fn test_cluster_overrides_single_letter() {
    // "brazo": "bra" (priority 50) must cover the standalone "b" (20)
    let analyzer = Analyzer::new();
    let analysis = analyzer.analyze("el brazo", "mirror").unwrap();

    let covering: Vec<_> = analysis
        .spans
        .iter()
        .filter(|s| !s.is_background && s.start == 3)
        .collect();
    assert_eq!(covering.len(), 1);
    assert_eq!(covering[0].length, 3);

    // no foreground span of length 1 survives at the "b"
    assert!(analysis
        .spans
        .iter()
        .filter(|s| !s.is_background)
        .all(|s| !(s.start == 3 && s.length == 1)));
}

#[test]
fn test_confusion_zone_at_gap_three() {
    // triggers 'b' at 0 and 'd' at 3: gap 3 < 6 emits a background zone [0, 4)
    let analyzer = Analyzer::new();
    let analysis = analyzer.analyze("bxxd", "mirror").unwrap();

    let bg: Vec<_> = analysis.spans.iter().filter(|s| s.is_background).collect();
    assert_eq!(bg.len(), 1);
    assert_eq!((bg[0].start, bg[0].length), (0, 4));

    // positions 1 and 2 carry only the background, never a foreground span
    assert!(analysis
        .spans
        .iter()
        .filter(|s| !s.is_background)
        .all(|s| s.start + s.length <= 1 || s.start >= 3));
}

#[test]
fn test_disjoint_matches_map_to_spans_one_to_one() {
    // phonetic mode on text with isolated matches only
    let analyzer = Analyzer::with_config(EngineConfig::plain());
    let analysis = analyzer.analyze("gato rojo", "phonetic").unwrap();

    // "g" at 0 and "j" at 7; no clusters, no close triggers
    let fg: Vec<_> = analysis.spans.iter().filter(|s| !s.is_background).collect();
    assert_eq!(fg.len(), analysis.metadata.pattern_matches);
    assert_eq!(fg.len(), 2);
}

#[test]
fn test_custom_mode_rules_from_profile() {
    let toml_str = r#"
        [metadata]
        code = "custom"
        name = "Custom"

        [[patterns]]
        pattern = "LL"
        style = 0x00FF00
        priority = 25

        [confusion]
        triggers = ["l"]
        style = 0xFFFF00
    "#;
    let profile: ModeProfile = toml::from_str(toml_str).unwrap();
    let rules = ModeRules::from_config(&profile).unwrap();
    assert_eq!(rules.patterns[0].pattern, "ll");

    let analysis = Analyzer::new()
        .analyze_with_rules("la llama llega", &rules)
        .unwrap();
    assert!(analysis.metadata.pattern_matches >= 2);
}

#[test]
fn test_analysis_metadata_counts() {
    let analyzer = Analyzer::new();
    let analysis = analyzer.analyze("la brisa del parque", "mirror").unwrap();
    assert_eq!(analysis.metadata.mode, "mirror");
    assert!(analysis.metadata.pattern_matches > 0);
    assert_eq!(analysis.metadata.break_points, analysis.breaks.len());
}
