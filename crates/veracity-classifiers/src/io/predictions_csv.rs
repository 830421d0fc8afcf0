//! Prediction table CSV writer.
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::PredictionResult;

/// Persist the full prediction sequence, one row per input record in input
/// order. Columns: `text`, `actual_label`, `predicted_label`, `confidence`
/// (formatted `NN.NN%`). Overwrites any existing file at the path.
pub fn write_predictions<P: AsRef<Path>>(path: P, predictions: &[PredictionResult]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer.write_record(["text", "actual_label", "predicted_label", "confidence"])?;
    for prediction in predictions {
        writer.write_record([
            prediction.text.as_str(),
            prediction.actual_label.as_str(),
            prediction.predicted_label.as_str(),
            prediction.formatted_confidence().as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}
