//! Error types. Every failure is caught near its origin and turned into a
//! default value or a short user-visible message; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Raw form input could not be turned into a typed record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("could not convert {field} value {value:?} to a number")]
    ValueConversion { field: &'static str, value: String },
    #[error("unknown option {value:?} for {field}")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("model artifact {path} is invalid: {reason}")]
    Artifact { path: PathBuf, reason: String },
    #[error("feature column {0:?} is not present in the input record")]
    MissingColumn(String),
    #[error("classifier exposes no probability output")]
    NoProbabilities,
    #[error("classifier returned malformed probabilities: {0:?}")]
    MalformedProbabilities(Vec<f64>),
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    /// True when the classifier can still be replaced by the 70/30 heuristic.
    pub fn is_probability_fault(&self) -> bool {
        matches!(
            self,
            ModelError::NoProbabilities | ModelError::MalformedProbabilities(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction model not available (missing: {})", .missing.join(", "))]
    ModelUnavailable { missing: Vec<&'static str> },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Inference(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("cache is stale ({age_secs:.0}s old)")]
    Stale { age_secs: f64 },
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset unavailable at {path}: {reason}")]
    Unavailable { path: PathBuf, reason: String },
    #[error("dataset row {row} could not be parsed: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
}
