//! In-memory tabular dataset.

use std::collections::BTreeMap;

use ndarray::Array2;

use crate::error::IoError;

/// A table of named `f64` columns with equal lengths.
///
/// Rows are independent observations; `f64::NAN` marks a missing value.
/// Column order is canonical (sorted by name), so iteration over the
/// dataset is deterministic.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: BTreeMap<String, Vec<f64>>,
    n_rows: usize,
}

impl Dataset {
    /// Builds a dataset from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptyDataset`] when no columns are given and
    /// [`IoError::ColumnLengthMismatch`] when the columns disagree on
    /// length.
    pub fn new(columns: BTreeMap<String, Vec<f64>>) -> Result<Self, IoError> {
        let n_rows = match columns.values().next() {
            Some(first) => first.len(),
            None => return Err(IoError::EmptyDataset),
        };

        for (name, column) in &columns {
            if column.len() != n_rows {
                return Err(IoError::ColumnLengthMismatch {
                    name: name.clone(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Convenience constructor from `(name, values)` pairs.
    pub fn from_columns<I, S>(pairs: I) -> Result<Self, IoError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let columns = pairs
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .collect();
        Self::new(columns)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in canonical (sorted) order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Looks up a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingColumn`] when the name is absent.
    pub fn column(&self, name: &str) -> Result<&[f64], IoError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Assembles the named columns into a row-major feature matrix
    /// `[n_rows × names.len()]`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingColumn`] for any absent name.
    pub fn features<S: AsRef<str>>(&self, names: &[S]) -> Result<Array2<f64>, IoError> {
        let mut matrix = Array2::zeros((self.n_rows, names.len()));
        for (j, name) in names.iter().enumerate() {
            let column = self.column(name.as_ref())?;
            for (i, &value) in column.iter().enumerate() {
                matrix[[i, j]] = value;
            }
        }
        Ok(matrix)
    }
}
