//! CLI glue for running the detection pipeline.
use std::path::Path;

use anyhow::{Context, Result};

use veracity_classifiers::config::PipelineConfig;
use veracity_classifiers::pipeline::{run, AnalysisOutcome};

/// How much article text the sample-prediction table shows per row.
const SAMPLE_TEXT_WIDTH: usize = 48;
/// How many prediction rows the console summary shows.
const SAMPLE_ROWS: usize = 5;

/// Load a pipeline configuration from a JSON file.
pub fn load_pipeline_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PipelineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Run the pipeline and print the evaluation summary plus a sample of the
/// prediction table.
pub fn run_analysis<P: AsRef<Path>>(dataset: P, config: &PipelineConfig) -> Result<AnalysisOutcome> {
    let outcome = run(dataset, config)?;
    print_summary(&outcome);
    println!("Analysis saved to '{}'.", config.output_path.display());
    Ok(outcome)
}

/// Print overall accuracy, the per-class report, and the first few rows of
/// the prediction table.
pub fn print_summary(outcome: &AnalysisOutcome) {
    println!("Model Accuracy: {:.2}", outcome.report.accuracy);
    println!();
    println!("Classification Report:");
    println!("{}", outcome.report);
    println!();
    println!("Sample Predictions:");
    println!(
        "{:<width$}  {:>12}  {:>15}  {:>10}",
        "text",
        "actual_label",
        "predicted_label",
        "confidence",
        width = SAMPLE_TEXT_WIDTH
    );
    for prediction in outcome.predictions.iter().take(SAMPLE_ROWS) {
        println!(
            "{:<width$}  {:>12}  {:>15}  {:>10}",
            truncate_for_display(&prediction.text, SAMPLE_TEXT_WIDTH),
            prediction.actual_label,
            prediction.predicted_label,
            prediction.formatted_confidence(),
            width = SAMPLE_TEXT_WIDTH
        );
    }
}

/// Clip text to `max` characters for the console table, appending `...`
/// when anything was cut.
pub fn truncate_for_display(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", clipped)
}
