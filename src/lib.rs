//! perfilar - Dataset Profiling and Quality Heuristics in Pure Rust
//!
//! Profiles a tabular dataset and produces descriptive summaries:
//! per-column statistics, missing-value tables, a Pearson correlation
//! matrix, top categorical values, and data-quality heuristics rolled
//! into a single quality score.
//!
//! # Design Principles
//!
//! 1. **One-shot** - every operation is a pure function over an
//!    in-memory dataset; no caching, no shared state
//! 2. **Pure Rust** - no Python, no FFI
//! 3. **Zero-copy** - Arrow `RecordBatch` throughout
//!
//! # Quick Start
//!
//! ```no_run
//! use perfilar::{summarize_dataset, ArrowDataset};
//!
//! let dataset = ArrowDataset::from_csv("data/train.csv").unwrap();
//! let summary = summarize_dataset(&dataset).unwrap();
//!
//! for column in &summary.columns {
//!     println!("{}: {} missing", column.name, column.missing_count);
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]

pub mod categorical;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod correlation;
pub mod dataset;
pub mod error;
pub mod missing;
pub mod profile;
pub mod quality;
pub mod summary;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use categorical::{top_categories, CategoryCount, ColumnCategories, TopCategories};
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use dataset::{ArrowDataset, CsvOptions, Dataset};
pub use error::{Error, Result};
pub use missing::{missing_table, MissingEntry, MissingTable};
pub use profile::{profile_dataset, DatasetProfile, ProfileOptions};
pub use quality::{
    compute_quality_flags, compute_quality_flags_with, is_id_like, QualityFlags, ScoreWeights,
};
pub use summary::{
    flatten_summary_for_print, summarize_dataset, ColumnKind, ColumnSummary, DatasetSummary,
    NumericSummary, SummaryRow,
};
