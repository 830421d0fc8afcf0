//! CSV input and output for the pipeline.
pub mod dataset_csv;
pub mod predictions_csv;

pub use dataset_csv::{read_dataset, read_dataset_with_config, DatasetReaderConfig};
pub use predictions_csv::write_predictions;
