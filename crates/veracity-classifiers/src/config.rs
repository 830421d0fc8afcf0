use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Central configuration for one pipeline run. The defaults reproduce the
/// reference behavior: `text`/`label` columns, a 0.2 held-out fraction,
/// seed 42, Laplace smoothing 1.0, and `fake_news_predictions.csv` in the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Column holding the raw article text.
    pub text_column: String,
    /// Column holding the class label.
    pub label_column: String,
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the stratified shuffle; fixed for reproducible splits.
    pub seed: u64,
    /// Additive smoothing for the Naive Bayes likelihoods.
    pub smoothing: f64,
    /// Where the per-row prediction table is written. An existing file at
    /// this path is overwritten without warning.
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
            label_column: "label".to_string(),
            test_fraction: 0.2,
            seed: 42,
            smoothing: 1.0,
            output_path: PathBuf::from("fake_news_predictions.csv"),
        }
    }
}
