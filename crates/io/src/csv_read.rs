//! CSV ingestion.

use std::collections::BTreeMap;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::IoError;

/// Tokens treated as missing values (case-insensitive).
const MISSING_TOKENS: &[&str] = &["", "na", "nan", "null"];

/// Reads a headed CSV file into a [`Dataset`].
///
/// Every column is numeric; empty cells and the usual missing-value
/// tokens (`NA`, `NaN`, `null`) become `f64::NAN`. Any other
/// unparseable cell is a hard error, as are rows with a cell count
/// different from the header.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Csv`] | malformed CSV (including ragged rows) |
/// | [`IoError::InvalidNumber`] | non-numeric, non-missing cell |
/// | [`IoError::EmptyDataset`] | the file has no columns |
pub fn read_csv(path: &Path) -> Result<Dataset, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(IoError::EmptyDataset);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        for (col_idx, cell) in record.iter().enumerate() {
            let value = parse_cell(cell).ok_or_else(|| IoError::InvalidNumber {
                row: row_idx + 1,
                column: headers[col_idx].clone(),
                value: cell.to_string(),
            })?;
            columns[col_idx].push(value);
        }
    }

    let map: BTreeMap<String, Vec<f64>> = headers.into_iter().zip(columns).collect();
    Dataset::new(map)
}

fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if MISSING_TOKENS.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return Some(f64::NAN);
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn basic_read() {
        let file = write_csv("x,y\n1.0,2.0\n3.0,4.0\n");
        let data = read_csv(file.path()).unwrap();
        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.column("x").unwrap(), &[1.0, 3.0]);
        assert_eq!(data.column("y").unwrap(), &[2.0, 4.0]);
    }

    #[test]
    fn missing_tokens_become_nan() {
        let file = write_csv("x,y\n1.0,\nNA,4.0\nnan,NULL\n");
        let data = read_csv(file.path()).unwrap();
        let x = data.column("x").unwrap();
        let y = data.column("y").unwrap();
        assert_eq!(x[0], 1.0);
        assert!(x[1].is_nan());
        assert!(x[2].is_nan());
        assert!(y[0].is_nan());
        assert_eq!(y[1], 4.0);
        assert!(y[2].is_nan());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let file = write_csv("x, y\n 1.5 , 2.5 \n");
        let data = read_csv(file.path()).unwrap();
        assert_eq!(data.column("y").unwrap(), &[2.5]);
    }

    #[test]
    fn garbage_cell_is_error() {
        let file = write_csv("x\n1.0\nhello\n");
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidNumber { row: 2, ref column, ref value }
                if column == "x" && value == "hello"
        ));
    }

    #[test]
    fn ragged_row_is_error() {
        let file = write_csv("x,y\n1.0,2.0\n3.0\n");
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_error() {
        let err = read_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn header_only_file() {
        let file = write_csv("a,b\n");
        let data = read_csv(file.path()).unwrap();
        assert_eq!(data.n_rows(), 0);
        assert_eq!(data.n_columns(), 2);
    }
}
