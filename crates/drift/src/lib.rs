//! # vigil-drift
//!
//! Memoryful validation checks: compare a newly captured dataset
//! against a historical baseline and decide whether its statistical
//! character has drifted.
//!
//! | Check | Question it answers |
//! |-------|---------------------|
//! | [`similar_clustering`] | does KNN regression still prefer the same neighbourhood size? |
//! | [`similar_correlation`] | do same-named columns still move together rank-wise? |
//! | [`similar_distribution`] | do same-named columns still share a distribution? |
//!
//! All three return `Ok(true)` when the new data is consistent with the
//! baseline; configuration and data-access problems are errors, never
//! silent failures.

mod clustering;
mod correlation;
mod distribution;
mod error;

pub use clustering::similar_clustering;
pub use correlation::similar_correlation;
pub use distribution::{ks_2sample, similar_distribution};
pub use error::DriftError;
