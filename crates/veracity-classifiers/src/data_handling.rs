//! Data structures and helpers for loading and partitioning news datasets.
//!
//! Defines the row types flowing through the pipeline and the stratified
//! train/test split used before vectorization.
use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::DetectorError;
use crate::preprocessing::normalize;

/// One input row as read from the dataset file. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Record {
    /// Raw article text.
    pub text: String,
    /// Class label, e.g. "real" or "fake".
    pub label: String,
}

/// A record plus its normalized text, derived once at load time and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProcessedRecord {
    pub text: String,
    pub label: String,
    /// Lowercase, letters-and-whitespace-only rendering of `text`.
    pub normalized: String,
}

impl ProcessedRecord {
    pub fn from_record(record: Record) -> Self {
        let normalized = normalize(&record.text);
        ProcessedRecord {
            text: record.text,
            label: record.label,
            normalized,
        }
    }
}

/// Normalize every record, preserving input order.
pub fn preprocess(records: Vec<Record>) -> Vec<ProcessedRecord> {
    let processed: Vec<ProcessedRecord> =
        records.into_iter().map(ProcessedRecord::from_record).collect();

    let empty = processed.iter().filter(|r| r.normalized.trim().is_empty()).count();
    if empty > 0 {
        log::warn!(
            "{} record(s) normalized to empty text; they will vectorize to all-zero features",
            empty
        );
    }

    processed
}

/// Log row and per-label counts for the loaded dataset.
pub fn log_dataset_summary(records: &[ProcessedRecord]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.label.as_str()).or_insert(0) += 1;
    }
    log::info!("{} records, {} label class(es)", records.len(), counts.len());
    for (label, count) in counts {
        log::info!("  label '{}': {} record(s)", label, count);
    }
}

/// Row indices of a stratified train/test partition. Together the two sides
/// cover every input row exactly once.
#[derive(Debug, Clone)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partition rows into disjoint train/test subsets whose per-label
/// proportions approximate the full dataset.
///
/// Per label class, `round(count * test_fraction)` rows go to the test
/// side. A class whose allocation would be zero rows or the whole class
/// cannot appear in both subsets and fails with
/// [`DetectorError::Stratification`].
///
/// Deterministic for a given seed and input ordering: classes are visited
/// in sorted label order and shuffled with a seeded RNG.
pub fn stratified_split(
    records: &[ProcessedRecord],
    test_fraction: f64,
    seed: u64,
) -> Result<SplitIndices, DetectorError> {
    assert!(
        test_fraction > 0.0 && test_fraction < 1.0,
        "test_fraction must be in (0, 1), got {}",
        test_fraction
    );

    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        by_label.entry(record.label.as_str()).or_default().push(index);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for (label, mut indices) in by_label {
        let n_test = (indices.len() as f64 * test_fraction).round() as usize;
        if n_test == 0 || n_test == indices.len() {
            return Err(DetectorError::Stratification {
                label: label.to_string(),
                count: indices.len(),
            });
        }
        indices.shuffle(&mut rng);
        test.extend_from_slice(&indices[..n_test]);
        train.extend_from_slice(&indices[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();

    log::debug!(
        "stratified split: {} train row(s), {} test row(s)",
        train.len(),
        test.len()
    );

    Ok(SplitIndices { train, test })
}
