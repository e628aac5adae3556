//! Column statistics extraction.
//!
//! Walks a dataset once and produces a [`DatasetSummary`]: one
//! [`ColumnSummary`] per column, in the dataset's column order, with
//! declared kind, missing counts, distinct counts, and basic moments
//! for numeric columns.

// Statistical computation over counters
#![allow(clippy::cast_precision_loss)]

use std::collections::HashSet;

use arrow::{
    array::{
        Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int16Array, Int32Array,
        Int64Array, Int8Array, LargeStringArray, StringArray, UInt16Array, UInt32Array,
        UInt64Array, UInt8Array,
    },
    datatypes::DataType,
};
use serde::Serialize;

use crate::{
    dataset::{ArrowDataset, Dataset},
    error::{Error, Result},
};

/// Declared kind of a column, determined once from its Arrow type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating-point column.
    Numeric,
    /// String column.
    Categorical,
    /// Boolean column.
    Boolean,
    /// Any other Arrow type.
    Unknown,
}

impl ColumnKind {
    /// Classify an Arrow data type.
    #[must_use]
    pub fn from_data_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => Self::Numeric,
            DataType::Utf8 | DataType::LargeUtf8 => Self::Categorical,
            DataType::Boolean => Self::Boolean,
            _ => Self::Unknown,
        }
    }

    /// Short display name for this kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
            Self::Unknown => "unknown",
        }
    }

    /// Whether numeric statistics apply to this kind.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Basic moments for a numeric column, over non-missing values only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

/// Per-column statistics. Created once per run; never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Declared kind.
    pub kind: ColumnKind,
    /// Number of missing (null) entries.
    pub missing_count: usize,
    /// missing_count / n_rows.
    pub missing_share: f64,
    /// Number of unique non-missing values.
    pub distinct_count: usize,
    /// Numeric moments; absent for non-numeric or all-missing columns.
    pub numeric: Option<NumericSummary>,
}

impl ColumnSummary {
    /// Number of non-missing entries, given the dataset row count.
    #[must_use]
    pub fn present_count(&self, n_rows: usize) -> usize {
        n_rows.saturating_sub(self.missing_count)
    }
}

/// Summary of an entire dataset, columns in original order.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Total row count.
    pub n_rows: usize,
    /// Total column count (`columns.len()`).
    pub n_cols: usize,
    /// Per-column summaries, in dataset column order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Look up a column summary by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// One display-ready row of a flattened summary.
///
/// Field order is fixed: name, kind, missing_count, missing_share,
/// distinct_count, then numeric stats (null when absent).
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    /// Column name.
    pub name: String,
    /// Declared kind.
    pub kind: ColumnKind,
    /// Number of missing entries.
    pub missing_count: usize,
    /// missing_count / n_rows.
    pub missing_share: f64,
    /// Number of unique non-missing values.
    pub distinct_count: usize,
    /// Minimum value, numeric columns only.
    pub min: Option<f64>,
    /// Maximum value, numeric columns only.
    pub max: Option<f64>,
    /// Arithmetic mean, numeric columns only.
    pub mean: Option<f64>,
}

/// Running aggregate for numeric columns.
#[derive(Debug, Default)]
struct NumericAccumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl NumericAccumulator {
    fn push(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    fn finish(&self) -> Option<NumericSummary> {
        if self.count == 0 {
            return None;
        }
        Some(NumericSummary {
            min: self.min,
            max: self.max,
            mean: self.sum / self.count as f64,
        })
    }
}

/// Summarize every column of a dataset.
///
/// Column order is preserved. A column of all-missing values has
/// `distinct_count == 0` and no numeric stats.
///
/// # Errors
///
/// Returns [`Error::EmptySchema`] for a zero-column dataset and
/// [`Error::EmptyDataset`] for a zero-row dataset.
pub fn summarize_dataset(dataset: &ArrowDataset) -> Result<DatasetSummary> {
    let schema = dataset.schema();
    if schema.fields().is_empty() {
        return Err(Error::EmptySchema);
    }
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let n_rows = dataset.len();
    let mut columns = Vec::with_capacity(schema.fields().len());

    for (col_idx, field) in schema.fields().iter().enumerate() {
        let kind = ColumnKind::from_data_type(field.data_type());

        let mut missing_count = 0usize;
        let mut distinct: HashSet<String> = HashSet::new();
        let mut acc = NumericAccumulator::default();

        for batch in dataset.iter() {
            let array = batch.column(col_idx);
            for row in 0..array.len() {
                match scalar_to_string(array, row) {
                    None => missing_count += 1,
                    Some(value) => {
                        distinct.insert(value);
                    }
                }
                if kind.is_numeric() {
                    if let Some(value) = numeric_value(array, row) {
                        acc.push(value);
                    }
                }
            }
        }

        columns.push(ColumnSummary {
            name: field.name().clone(),
            kind,
            missing_count,
            missing_share: missing_count as f64 / n_rows as f64,
            distinct_count: distinct.len(),
            numeric: acc.finish(),
        });
    }

    Ok(DatasetSummary {
        n_rows,
        n_cols: columns.len(),
        columns,
    })
}

/// Flatten a [`DatasetSummary`] into display-ready rows, one per column.
///
/// Purely presentational; no decision logic.
#[must_use]
pub fn flatten_summary_for_print(summary: &DatasetSummary) -> Vec<SummaryRow> {
    summary
        .columns
        .iter()
        .map(|c| SummaryRow {
            name: c.name.clone(),
            kind: c.kind,
            missing_count: c.missing_count,
            missing_share: c.missing_share,
            distinct_count: c.distinct_count,
            min: c.numeric.map(|n| n.min),
            max: c.numeric.map(|n| n.max),
            mean: c.numeric.map(|n| n.mean),
        })
        .collect()
}

/// Read a cell as a display string, None for nulls.
pub(crate) fn scalar_to_string(array: &ArrayRef, row: usize) -> Option<String> {
    if array.is_null(row) {
        return None;
    }

    let any = array.as_any();
    if let Some(arr) = any.downcast_ref::<StringArray>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<LargeStringArray>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<BooleanArray>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Int8Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Int16Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Int32Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<UInt8Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<UInt16Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<UInt32Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<UInt64Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Float32Array>() {
        return Some(arr.value(row).to_string());
    }
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        return Some(arr.value(row).to_string());
    }

    Some("?".to_string())
}

/// Read a cell as f64, None for nulls or non-numeric arrays.
#[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
pub(crate) fn numeric_value(array: &ArrayRef, row: usize) -> Option<f64> {
    if array.is_null(row) {
        return None;
    }

    let any = array.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        return Some(arr.value(row));
    }
    if let Some(arr) = any.downcast_ref::<Float32Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<Int8Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<Int16Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<Int32Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        return Some(arr.value(row) as f64);
    }
    if let Some(arr) = any.downcast_ref::<UInt8Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<UInt16Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<UInt32Array>() {
        return Some(f64::from(arr.value(row)));
    }
    if let Some(arr) = any.downcast_ref::<UInt64Array>() {
        return Some(arr.value(row) as f64);
    }

    None
}
