//! Quality flags and the aggregate score.

#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{missing::MissingTable, summary::DatasetSummary};

use super::naming::is_id_like;

/// Penalty weights for the quality score.
///
/// The score starts at 1.0 and subtracts each weight times its
/// observed fraction, so a weight bounds the maximum penalty of its
/// term. The defaults (0.4 missing, 0.3 constant, 0.3 ID duplicates)
/// sum to 1.0, which lets a fully degenerate dataset reach 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    /// Weight of the average missing share across columns.
    pub missing: f64,
    /// Weight of the fraction of columns that are constant.
    pub constant: f64,
    /// Weight of the fraction of ID-like columns with duplicates.
    pub id_duplicates: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            missing: 0.4,
            constant: 0.3,
            id_duplicates: 0.3,
        }
    }
}

impl ScoreWeights {
    /// Set the missing-share weight.
    #[must_use]
    pub fn with_missing(mut self, weight: f64) -> Self {
        self.missing = weight;
        self
    }

    /// Set the constant-column weight.
    #[must_use]
    pub fn with_constant(mut self, weight: f64) -> Self {
        self.constant = weight;
        self
    }

    /// Set the ID-duplicate weight.
    #[must_use]
    pub fn with_id_duplicates(mut self, weight: f64) -> Self {
        self.id_duplicates = weight;
        self
    }
}

/// Derived quality flags for one dataset. Recomputed fresh per call.
#[derive(Debug, Clone, Serialize)]
pub struct QualityFlags {
    /// Whether any column has a single distinct non-missing value.
    pub has_constant_columns: bool,
    /// Names of constant columns.
    pub constant_columns: BTreeSet<String>,
    /// Whether any ID-like column contains duplicated values.
    pub has_suspicious_id_duplicates: bool,
    /// Names of ID-like columns with duplicates.
    pub suspicious_id_columns: BTreeSet<String>,
    /// Aggregate score in [0, 1]; higher is better.
    pub quality_score: f64,
}

/// Compute quality flags with default [`ScoreWeights`].
#[must_use]
pub fn compute_quality_flags(summary: &DatasetSummary, missing: &MissingTable) -> QualityFlags {
    compute_quality_flags_with(summary, missing, ScoreWeights::default())
}

/// Compute quality flags with explicit weights.
///
/// The score is monotone: adding missing values, constant columns, or
/// ID duplicates never increases it, all else equal.
#[must_use]
pub fn compute_quality_flags_with(
    summary: &DatasetSummary,
    missing: &MissingTable,
    weights: ScoreWeights,
) -> QualityFlags {
    let constant_columns: BTreeSet<String> = summary
        .columns
        .iter()
        .filter(|c| c.distinct_count == 1)
        .map(|c| c.name.clone())
        .collect();

    let id_like: Vec<_> = summary
        .columns
        .iter()
        .filter(|c| is_id_like(&c.name))
        .collect();

    // A duplicate exists when fewer distinct values than non-missing rows
    let suspicious_id_columns: BTreeSet<String> = id_like
        .iter()
        .filter(|c| {
            let present = c.present_count(summary.n_rows);
            c.distinct_count > 0 && c.distinct_count < present
        })
        .map(|c| c.name.clone())
        .collect();

    let avg_missing_share = missing.average_share();

    let constant_fraction = if summary.n_cols == 0 {
        0.0
    } else {
        constant_columns.len() as f64 / summary.n_cols as f64
    };

    let suspicious_fraction = if id_like.is_empty() {
        0.0
    } else {
        suspicious_id_columns.len() as f64 / id_like.len() as f64
    };

    let quality_score = (1.0
        - weights.missing * avg_missing_share
        - weights.constant * constant_fraction
        - weights.id_duplicates * suspicious_fraction)
        .clamp(0.0, 1.0);

    QualityFlags {
        has_constant_columns: !constant_columns.is_empty(),
        constant_columns,
        has_suspicious_id_duplicates: !suspicious_id_columns.is_empty(),
        suspicious_id_columns,
        quality_score,
    }
}
