//! End-to-end batch pipeline: load, normalize, split, fit, evaluate,
//! predict, persist.
//!
//! One run is a single synchronous pass: the loader reads every row into
//! memory, the vectorizer and classifier are fit once on the training
//! subset, and the fitted state is then read-only for evaluation and the
//! batch prediction sweep.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::PipelineConfig;
use crate::data_handling::{
    log_dataset_summary, preprocess, stratified_split, ProcessedRecord,
};
use crate::io::dataset_csv::{read_dataset_with_config, DatasetReaderConfig};
use crate::io::predictions_csv::write_predictions;
use crate::metrics::{classification_report, ClassificationReport};
use crate::models::classifier_trait::{argmax, ProbabilisticModel};
use crate::models::naive_bayes::MultinomialNb;
use crate::vectorize::{FittedVectorizer, TfidfVectorizer};

/// One scored row of the batch prediction pass.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub text: String,
    pub actual_label: String,
    pub predicted_label: String,
    /// Max posterior probability across classes, as a percentage.
    pub confidence: f64,
}

impl PredictionResult {
    /// Confidence rendered with two decimal places, e.g. `97.31%`.
    pub fn formatted_confidence(&self) -> String {
        format!("{:.2}%", self.confidence)
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Scores on the held-out split.
    pub report: ClassificationReport,
    /// One entry per input record, in input order.
    pub predictions: Vec<PredictionResult>,
}

/// Run the full pipeline over the dataset at `dataset_path` and persist
/// the prediction table to `config.output_path`.
pub fn run<P: AsRef<Path>>(dataset_path: P, config: &PipelineConfig) -> Result<AnalysisOutcome> {
    let dataset_path = dataset_path.as_ref();
    let reader_config = DatasetReaderConfig {
        text_column: config.text_column.clone(),
        label_column: config.label_column.clone(),
    };

    let records = preprocess(read_dataset_with_config(dataset_path, &reader_config)?);
    info!("Loaded {} record(s) from {}", records.len(), dataset_path.display());
    log_dataset_summary(&records);

    let split = stratified_split(&records, config.test_fraction, config.seed)?;

    // Vocabulary is learned from the training subset only; the held-out
    // split is transformed with the same fitted state.
    let train_texts: Vec<&str> = split
        .train
        .iter()
        .map(|&index| records[index].normalized.as_str())
        .collect();
    let vectorizer = TfidfVectorizer::new().fit(&train_texts)?;

    let train_features = vectorizer.transform_batch(&train_texts);
    let train_labels: Vec<String> = split
        .train
        .iter()
        .map(|&index| records[index].label.clone())
        .collect();
    let model = MultinomialNb::new()
        .with_smoothing(config.smoothing)
        .fit(&train_features, &train_labels)?;

    let report = evaluate(&records, &split.test, &vectorizer, &model);
    info!("Held-out accuracy: {:.2}", report.accuracy);

    let predictions = predict_all(&records, &vectorizer, &model);
    write_predictions(&config.output_path, &predictions).with_context(|| {
        format!(
            "Failed to persist predictions to {}",
            config.output_path.display()
        )
    })?;
    info!(
        "Wrote {} prediction(s) to {}",
        predictions.len(),
        config.output_path.display()
    );

    Ok(AnalysisOutcome { report, predictions })
}

/// Score the rows at `indices` with the fitted pipeline state.
pub fn evaluate<M: ProbabilisticModel>(
    records: &[ProcessedRecord],
    indices: &[usize],
    vectorizer: &FittedVectorizer,
    model: &M,
) -> ClassificationReport {
    let actual: Vec<String> = indices
        .iter()
        .map(|&index| records[index].label.clone())
        .collect();
    let predicted: Vec<String> = indices
        .iter()
        .map(|&index| {
            let features = vectorizer.transform(&records[index].normalized);
            model.classes()[model.predict(&features)].clone()
        })
        .collect();

    classification_report(&actual, &predicted)
}

/// Score every record with the fitted vectorizer and classifier, in input
/// order. Training rows are scored too; they were seen during fitting, so
/// their confidences read optimistic, but the output keeps one row per
/// input regardless of split membership.
pub fn predict_all<M: ProbabilisticModel>(
    records: &[ProcessedRecord],
    vectorizer: &FittedVectorizer,
    model: &M,
) -> Vec<PredictionResult> {
    records
        .iter()
        .map(|record| {
            let features = vectorizer.transform(&record.normalized);
            let proba = model.predict_proba(&features);
            let best = argmax(&proba);
            PredictionResult {
                text: record.text.clone(),
                actual_label: record.label.clone(),
                predicted_label: model.classes()[best].clone(),
                confidence: proba[best] * 100.0,
            }
        })
        .collect()
}
