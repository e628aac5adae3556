//! Pairwise Pearson correlation over numeric columns.
//!
//! Uses a pairwise-complete-observations policy: each pair is computed
//! over the rows where both columns are non-missing, not over rows
//! complete across the whole dataset.

#![allow(clippy::cast_precision_loss)]

use arrow::array::Array;
use serde::Serialize;

use crate::{
    dataset::{ArrowDataset, Dataset},
    error::{Error, Result},
    summary::{numeric_value, ColumnKind},
};

/// Square, symmetric correlation matrix over numeric columns.
///
/// The diagonal is 1.0 for every numeric column with at least one
/// non-missing value. Entries with fewer than 2 jointly non-missing
/// rows, or with zero variance on either side, are NaN.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Names of the numeric columns included, in dataset order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The full coefficient grid, row-major in column order.
    #[must_use]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Look up a coefficient by column names.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Number of columns in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the matrix has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the Pearson correlation matrix of a dataset's numeric columns.
///
/// Columns whose values cannot be read as f64 are excluded rather than
/// failing the call. Fewer than two numeric columns yields an empty
/// matrix, not an error.
///
/// # Errors
///
/// Returns [`Error::EmptySchema`] for a zero-column dataset and
/// [`Error::EmptyDataset`] for a zero-row dataset.
pub fn correlation_matrix(dataset: &ArrowDataset) -> Result<CorrelationMatrix> {
    let schema = dataset.schema();
    if schema.fields().is_empty() {
        return Err(Error::EmptySchema);
    }
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut columns: Vec<String> = Vec::new();
    let mut data: Vec<Vec<Option<f64>>> = Vec::new();

    for (col_idx, field) in schema.fields().iter().enumerate() {
        if !ColumnKind::from_data_type(field.data_type()).is_numeric() {
            continue;
        }
        match collect_numeric(dataset, col_idx, field.name()) {
            Ok(values) => {
                columns.push(field.name().clone());
                data.push(values);
            }
            // Non-coercible columns are excluded, not fatal
            Err(Error::TypeMismatch { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    if columns.len() < 2 {
        return Ok(CorrelationMatrix {
            columns: Vec::new(),
            values: Vec::new(),
        });
    }

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        let has_values = data[i].iter().any(Option::is_some);
        values[i][i] = if has_values { 1.0 } else { f64::NAN };

        for j in (i + 1)..n {
            let r = pearson(&data[i], &data[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Collect a numeric column as f64 values, preserving nulls.
fn collect_numeric(dataset: &ArrowDataset, col_idx: usize, name: &str) -> Result<Vec<Option<f64>>> {
    let mut out = Vec::with_capacity(dataset.len());

    for batch in dataset.iter() {
        let array = batch.column(col_idx);
        for row in 0..array.len() {
            if array.is_null(row) {
                out.push(None);
                continue;
            }
            match numeric_value(array, row) {
                Some(value) => out.push(Some(value)),
                None => {
                    return Err(Error::type_mismatch(name, "values are not readable as f64"));
                }
            }
        }
    }

    Ok(out)
}

/// Pearson correlation over jointly non-missing rows.
///
/// NaN when fewer than 2 joint observations exist or either side has
/// zero variance.
fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }

    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Float64Array, Int32Array, RecordBatch, StringArray},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;

    fn numeric_dataset() -> ArrowDataset {
        let schema = Arc::new(Schema::new(vec![
            Field::new("age", DataType::Float64, true),
            Field::new("height", DataType::Int32, false),
            Field::new("city", DataType::Utf8, true),
        ]));

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![
                    Some(10.0),
                    Some(20.0),
                    Some(30.0),
                    None,
                ])),
                Arc::new(Int32Array::from(vec![140, 150, 160, 170])),
                Arc::new(StringArray::from(vec![
                    Some("A"),
                    Some("B"),
                    Some("A"),
                    None,
                ])),
            ],
        )
        .unwrap();

        ArrowDataset::from_batch(batch).unwrap()
    }

    #[test]
    fn test_matrix_shape_and_columns() {
        let matrix = correlation_matrix(&numeric_dataset()).unwrap();
        // Only the two numeric columns qualify
        assert_eq!(matrix.columns(), &["age".to_string(), "height".to_string()]);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.values().len(), 2);
    }

    #[test]
    fn test_diagonal_is_one() {
        let matrix = correlation_matrix(&numeric_dataset()).unwrap();
        assert_eq!(matrix.get("age", "age"), Some(1.0));
        assert_eq!(matrix.get("height", "height"), Some(1.0));
    }

    #[test]
    fn test_symmetry() {
        let matrix = correlation_matrix(&numeric_dataset()).unwrap();
        let ab = matrix.get("age", "height").unwrap();
        let ba = matrix.get("height", "age").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_pairwise_complete_policy() {
        // age has a null in the last row; the pair uses the first 3 rows,
        // where age and height are both perfectly linear.
        let matrix = correlation_matrix(&numeric_dataset()).unwrap();
        let r = matrix.get("age", "height").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_correlation() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("up", DataType::Float64, false),
            Field::new("down", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0, 4.0])),
                Arc::new(Float64Array::from(vec![8.0, 6.0, 4.0, 2.0])),
            ],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        let matrix = correlation_matrix(&dataset).unwrap();
        let r = matrix.get("up", "down").unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_two_numeric_is_empty() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("city", DataType::Utf8, true),
            Field::new("age", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["A", "B"])),
                Arc::new(Float64Array::from(vec![1.0, 2.0])),
            ],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        let matrix = correlation_matrix(&dataset).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_too_few_joint_rows_is_nan() {
        // Nulls alternate, so no row has both values present.
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Float64, true),
            Field::new("b", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![Some(1.0), None, Some(3.0), None])),
                Arc::new(Float64Array::from(vec![None, Some(2.0), None, Some(4.0)])),
            ],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        let matrix = correlation_matrix(&dataset).unwrap();
        assert!(matrix.get("a", "b").unwrap().is_nan());
        // Diagonal stays 1.0: each column has non-missing values
        assert_eq!(matrix.get("a", "a"), Some(1.0));
    }

    #[test]
    fn test_zero_variance_is_nan() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("flat", DataType::Float64, false),
            Field::new("vary", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![5.0, 5.0, 5.0])),
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
            ],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        let matrix = correlation_matrix(&dataset).unwrap();
        assert!(matrix.get("flat", "vary").unwrap().is_nan());
        assert_eq!(matrix.get("flat", "flat"), Some(1.0));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Int32, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int32Array::from(Vec::<i32>::new()))],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        assert!(matches!(
            correlation_matrix(&dataset),
            Err(Error::EmptyDataset)
        ));
    }
}
