//! Workspace-level error aggregation.

use std::path::PathBuf;

/// Error type for the high-level runners and configuration loading.
///
/// Wraps every member crate's error so callers handle one type at the
/// facade boundary.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    /// Dataset loading or lookup failed.
    #[error(transparent)]
    Io(#[from] vigil_io::IoError),

    /// Model artifact or metadata loading failed.
    #[error(transparent)]
    Model(#[from] vigil_model::ModelError),

    /// A threshold check failed to run.
    #[error(transparent)]
    Check(#[from] vigil_checks::CheckError),

    /// A drift check failed to run.
    #[error(transparent)]
    Drift(#[from] vigil_drift::DriftError),

    /// A time-series diagnostic failed to run.
    #[error(transparent)]
    Series(#[from] vigil_series::SeriesError),

    /// A configuration file could not be read or parsed.
    #[error("configuration file {}: {reason}", path.display())]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_messages_pass_through() {
        let err: VigilError = vigil_io::IoError::EmptyDataset.into();
        assert_eq!(err.to_string(), "dataset has no columns");

        let err: VigilError = vigil_series::SeriesError::EmptyData.into();
        assert_eq!(err.to_string(), "input series is empty");
    }

    #[test]
    fn config_display() {
        let err = VigilError::Config {
            path: PathBuf::from("/tmp/thresholds.json"),
            reason: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "configuration file /tmp/thresholds.json: unexpected end of input"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<VigilError>();
    }
}
