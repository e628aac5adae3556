//! Data-quality heuristics.
//!
//! Consumes a [`DatasetSummary`](crate::summary::DatasetSummary) and a
//! [`MissingTable`](crate::missing::MissingTable) and derives boolean
//! quality flags plus an aggregate score in [0, 1]:
//!
//! - **Constant columns**: a single distinct non-missing value.
//! - **Suspicious ID duplicates**: ID-like column names with repeated
//!   non-missing values.
//!
//! Both detectors are stateless; flags are recomputed fresh on every
//! call.

mod flags;
mod naming;


pub use flags::{compute_quality_flags, compute_quality_flags_with, QualityFlags, ScoreWeights};
pub use naming::is_id_like;
