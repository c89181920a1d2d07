//! Basic usage example for the three-crate architecture

use resalta_api::{analyze_text, Config, TextAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = analyze_text("la brisa del parque abraza los arboles")?;

    println!("Resolved {} spans:", output.spans.len());
    for span in &output.spans {
        let layer = if span.is_background { "bg" } else { "fg" };
        println!(
            "  [{}, {}) {layer} style {:#08X}",
            span.start,
            span.start + span.length,
            span.style
        );
    }
    println!("Break marks at {:?}", output.breaks);
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: A different registered mode
    println!("=== Method 2: Phonetic Mode ===");
    let analyzer = TextAnalyzer::with_mode("phonetic")?;
    let output = analyzer.process_text("el gigante juega en el jardin")?;
    println!(
        "Phonetic mode: {} matches, {} confusion zones",
        output.metadata.pattern_matches, output.metadata.confusion_zones
    );

    // Method 3: Custom configuration
    println!("\n=== Method 3: Custom Configuration ===");
    let config = Config::builder()
        .mode("mirror")
        .window_gap(4)
        .syllable_marks(false)
        .build()?;
    let analyzer = TextAnalyzer::with_config(config)?;

    let output = analyzer.process_text("un burdo dibujo que pudo quedar bien")?;
    println!(
        "Custom config resolved {} spans in {} bytes",
        output.spans.len(),
        output.metadata.total_bytes
    );

    Ok(())
}
