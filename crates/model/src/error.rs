//! Error types for the vigil-model crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the vigil-model crate.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a JSON (de)serialization failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a feature matrix has the wrong number of columns.
    #[error("feature dimension mismatch: model expects {expected}, got {got}")]
    DimensionMismatch {
        /// Columns the model was trained with.
        expected: usize,
        /// Columns supplied at prediction time.
        got: usize,
    },

    /// Returned when a classifier artifact has no classes.
    #[error("classifier has no centroids")]
    NoCentroids,

    /// Returned when an artifact without label output is used as a classifier.
    #[error("artifact kind '{kind}' is not a classifier")]
    NotAClassifier {
        /// The artifact kind.
        kind: &'static str,
    },
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Json {
            reason: e.to_string(),
        }
    }
}
