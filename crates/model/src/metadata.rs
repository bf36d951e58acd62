//! Model metadata sidecars.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artifact::read_file;
use crate::error::ModelError;

/// The JSON sidecar persisted next to a model artifact, naming the
/// dataset columns the model consumes and the column it predicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// Feature column names, in the order the model expects them.
    pub feature_columns: Vec<String>,
    /// Target column name.
    pub target: String,
}

/// Loads a [`Metadata`] sidecar from a JSON file.
///
/// # Errors
///
/// Returns [`ModelError::FileNotFound`] for a missing path and
/// [`ModelError::Json`] for malformed contents or unknown fields.
pub fn load_metadata(path: &Path) -> Result<Metadata, ModelError> {
    let text = read_file(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal() {
        let meta: Metadata = serde_json::from_str(
            r#"{"feature_columns": ["a", "b"], "target": "y"}"#,
        )
        .unwrap();
        assert_eq!(meta.feature_columns, vec!["a", "b"]);
        assert_eq!(meta.target, "y");
    }

    #[test]
    fn unknown_field_is_error() {
        let result = serde_json::from_str::<Metadata>(
            r#"{"feature_columns": [], "target": "y", "extra": 1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_field_is_error() {
        let result = serde_json::from_str::<Metadata>(r#"{"target": "y"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feature_columns": ["x1", "x2"], "target": "label"}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let meta = load_metadata(file.path()).unwrap();
        assert_eq!(meta.feature_columns.len(), 2);
        assert_eq!(meta.target, "label");
    }

    #[test]
    fn load_missing_file() {
        let err = load_metadata(Path::new("/nope/meta.json")).unwrap_err();
        assert!(matches!(err, ModelError::FileNotFound { .. }));
    }
}
