//! # vigil-io
//!
//! Read tabular test datasets from CSV and bridge them into the
//! workspace's slice- and matrix-based APIs. A [`Dataset`] is a set of
//! equally sized named `f64` columns; `f64::NAN` encodes a missing
//! value.

mod csv_read;
mod dataset;
mod error;

pub use csv_read::read_csv;
pub use dataset::Dataset;
pub use error::IoError;
