//! Basic tests for resalta-api

use resalta_api::*;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("la brisa".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "la brisa");
}

#[test]
fn test_input_bytes_processing() {
    let bytes = b"la brisa".to_vec();
    let input = Input::Bytes(bytes);
    let text = input.read_text().unwrap();
    assert_eq!(text, "la brisa");
}

#[test]
fn test_input_reader_processing() {
    let reader = std::io::Cursor::new("la brisa");
    let input = Input::from_reader(reader);
    assert_eq!(input.read_text().unwrap(), "la brisa");
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .mode("phonetic")
        .window_gap(4)
        .syllable_marks(false)
        .build()
        .unwrap();
    assert_eq!(config.mode(), "phonetic");
}

#[test]
fn test_config_rejects_empty_mode() {
    let result = Config::builder().mode("").build();
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn test_unknown_mode_surfaces_at_construction() {
    match TextAnalyzer::with_mode("klingon") {
        Err(ApiError::UnknownMode { code }) => assert_eq!(code, "klingon"),
        other => panic!("expected UnknownMode, got {:?}", other.err()),
    }
}

#[test]
fn test_analyze_text_convenience() {
    let output = analyze_text("la brisa del parque").unwrap();

    assert!(!output.spans.is_empty());
    assert_eq!(output.metadata.total_bytes, 19);
    assert_eq!(output.metadata.mode_used, "mirror");
    // Processing time should be recorded
    let _ = output.metadata.processing_time_ms;
}

#[test]
fn test_available_modes_exposed() {
    let modes = available_modes();
    assert!(modes.iter().any(|m| m == "mirror"));
    assert!(modes.iter().any(|m| m == "phonetic"));
}

#[test]
#[cfg(feature = "serde")]
fn test_dto_serialization() {
    let span = Span {
        start: 3,
        length: 3,
        is_background: false,
        style: 0x8B0000,
    };

    let json = serde_json::to_string(&span).unwrap();
    let deserialized: Span = serde_json::from_str(&json).unwrap();

    assert_eq!(span, deserialized);
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = analyze_text_with_mode("la brisa", "mirror").unwrap();

    let json = serde_json::to_string(&output).unwrap();
    let deserialized: Output = serde_json::from_str(&json).unwrap();

    assert_eq!(output.spans.len(), deserialized.spans.len());
    assert_eq!(
        output.metadata.total_bytes,
        deserialized.metadata.total_bytes
    );
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let api_error: ApiError = io_error.into();

    match api_error {
        ApiError::Io(_) => (), // Expected
        _ => panic!("Wrong error type"),
    }
}
