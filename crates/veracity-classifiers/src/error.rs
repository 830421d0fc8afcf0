use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Typed failures surfaced by the detection pipeline. Anything outside this
/// taxonomy propagates as a context-wrapped `anyhow::Error` and aborts the
/// run; there is no partial-result recovery.
#[derive(Debug)]
pub enum DetectorError {
    /// The input path did not resolve to a readable file.
    MissingFile(PathBuf),
    /// A required column is absent from the dataset.
    Schema(String),
    /// A label class is too rare to appear in both splits at the requested
    /// held-out fraction.
    Stratification { label: String, count: usize },
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DetectorError::MissingFile(path) => {
                write!(f, "dataset file not found: {}", path.display())
            }
            DetectorError::Schema(message) => write!(f, "{}", message),
            DetectorError::Stratification { label, count } => write!(
                f,
                "label class '{}' has {} member(s), too few to appear in both the training and test splits",
                label, count
            ),
        }
    }
}

impl Error for DetectorError {}
