//! Labeled news dataset CSV reader.
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::data_handling::Record;
use crate::error::DetectorError;

/// Configuration for reading a labeled news CSV file.
#[derive(Debug, Clone)]
pub struct DatasetReaderConfig {
    /// Column holding the raw article text.
    pub text_column: String,
    /// Column holding the class label.
    pub label_column: String,
}

impl Default for DatasetReaderConfig {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
            label_column: "label".to_string(),
        }
    }
}

/// Read a labeled dataset with the default column names.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    read_dataset_with_config(path, &DatasetReaderConfig::default())
}

/// Read a labeled dataset using a custom column configuration.
///
/// Fails with [`DetectorError::MissingFile`] when the path is not a
/// readable file and with [`DetectorError::Schema`] when a required column
/// is absent. Short rows yield empty cell values and propagate downstream;
/// no further validation is performed.
pub fn read_dataset_with_config<P: AsRef<Path>>(
    path: P,
    config: &DatasetReaderConfig,
) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DetectorError::MissingFile(path.to_path_buf()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read dataset header row")?
        .clone();

    let schema_error = || {
        DetectorError::Schema(format!(
            "Dataset must contain '{}' and '{}' columns.",
            config.text_column, config.label_column
        ))
    };
    let text_idx = find_column(&headers, &config.text_column).ok_or_else(schema_error)?;
    let label_idx = find_column(&headers, &config.label_column).ok_or_else(schema_error)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        records.push(Record {
            text: record.get(text_idx).unwrap_or_default().to_string(),
            label: record.get(label_idx).unwrap_or_default().trim().to_string(),
        });
    }

    Ok(records)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
