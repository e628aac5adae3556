//! Full-dataset profiling.
//!
//! Bundles the individual reporters into one pass-shaped result so
//! callers (the CLI `report` command in particular) get everything
//! from a single call.

use serde::Serialize;

use crate::{
    categorical::{top_categories, TopCategories},
    correlation::{correlation_matrix, CorrelationMatrix},
    dataset::ArrowDataset,
    error::Result,
    missing::{missing_table, MissingTable},
    quality::{compute_quality_flags_with, QualityFlags, ScoreWeights},
    summary::{summarize_dataset, DatasetSummary},
};

/// Configuration scalars for a full profile run.
#[derive(Debug, Clone, Copy)]
pub struct ProfileOptions {
    /// Cardinality ceiling for the top-K categorical report.
    pub max_columns: usize,
    /// Number of top values kept per categorical column.
    pub top_k: usize,
    /// Quality score weights.
    pub weights: ScoreWeights,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            max_columns: 20,
            top_k: 10,
            weights: ScoreWeights::default(),
        }
    }
}

/// Complete profile of one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetProfile {
    /// Per-column statistics.
    pub summary: DatasetSummary,
    /// Missing-value table.
    pub missing: MissingTable,
    /// Pearson correlation over numeric columns.
    pub correlation: CorrelationMatrix,
    /// Top categorical values.
    pub top_categories: TopCategories,
    /// Quality flags and score.
    pub flags: QualityFlags,
}

/// Run every reporter over a dataset and collect the results.
///
/// Each reporter is the same pure function exposed individually; this
/// only sequences them.
///
/// # Errors
///
/// Returns the shared validation errors for zero-column or zero-row
/// datasets.
pub fn profile_dataset(dataset: &ArrowDataset, options: &ProfileOptions) -> Result<DatasetProfile> {
    let summary = summarize_dataset(dataset)?;
    let missing = missing_table(dataset)?;
    let correlation = correlation_matrix(dataset)?;
    let categories = top_categories(dataset, options.max_columns, options.top_k)?;
    let flags = compute_quality_flags_with(&summary, &missing, options.weights);

    Ok(DatasetProfile {
        summary,
        missing,
        correlation,
        top_categories: categories,
        flags,
    })
}
