//! Missing-value reporting.
//!
//! Recomputes missing counts per column, independently of the column
//! statistics extractor. The two must agree; this reporter reads Arrow
//! null counts directly instead of walking values.

#![allow(clippy::cast_precision_loss)]

use arrow::array::Array;
use serde::Serialize;

use crate::{
    dataset::{ArrowDataset, Dataset},
    error::{Error, Result},
};

/// Missing counts for a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingEntry {
    /// Column name.
    pub name: String,
    /// Number of missing (null) entries.
    pub missing_count: usize,
    /// missing_count / n_rows.
    pub missing_share: f64,
}

/// Per-column missing-value table, ordered as the dataset's columns.
#[derive(Debug, Clone, Serialize)]
pub struct MissingTable {
    entries: Vec<MissingEntry>,
}

impl MissingTable {
    /// All entries, in dataset column order.
    #[must_use]
    pub fn entries(&self) -> &[MissingEntry] {
        &self.entries
    }

    /// Look up an entry by column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MissingEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of columns in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Average missing share across columns.
    #[must_use]
    pub fn average_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| e.missing_share).sum::<f64>() / self.entries.len() as f64
    }
}

/// Build a missing-value table for a dataset.
///
/// # Errors
///
/// Returns [`Error::EmptySchema`] for a zero-column dataset and
/// [`Error::EmptyDataset`] for a zero-row dataset.
pub fn missing_table(dataset: &ArrowDataset) -> Result<MissingTable> {
    let schema = dataset.schema();
    if schema.fields().is_empty() {
        return Err(Error::EmptySchema);
    }
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let n_rows = dataset.len();
    let mut entries = Vec::with_capacity(schema.fields().len());

    for (col_idx, field) in schema.fields().iter().enumerate() {
        let missing_count: usize = dataset
            .iter()
            .map(|batch| batch.column(col_idx).null_count())
            .sum();

        entries.push(MissingEntry {
            name: field.name().clone(),
            missing_count,
            missing_share: missing_count as f64 / n_rows as f64,
        });
    }

    Ok(MissingTable { entries })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Float64Array, Int32Array, RecordBatch, StringArray},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;
    use crate::summary::summarize_dataset;

    fn sample_dataset() -> ArrowDataset {
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
    fn test_missing_table_counts() {
        let table = missing_table(&sample_dataset()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("age").unwrap().missing_count, 1);
        assert_eq!(table.get("height").unwrap().missing_count, 0);
        assert_eq!(table.get("city").unwrap().missing_count, 1);
        assert!((table.get("age").unwrap().missing_share - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_missing_table_order_matches_dataset() {
        let table = missing_table(&sample_dataset()).unwrap();
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["age", "height", "city"]);
    }

    #[test]
    fn test_agrees_with_summary() {
        let dataset = sample_dataset();
        let table = missing_table(&dataset).unwrap();
        let summary = summarize_dataset(&dataset).unwrap();

        for column in &summary.columns {
            let entry = table.get(&column.name).unwrap();
            assert_eq!(entry.missing_count, column.missing_count);
            assert!((entry.missing_share - column.missing_share).abs() < 1e-12);
        }
    }

    #[test]
    fn test_average_share() {
        let table = missing_table(&sample_dataset()).unwrap();
        // (0.25 + 0.0 + 0.25) / 3
        assert!((table.average_share() - 0.5 / 3.0).abs() < 1e-12);
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

        assert!(matches!(missing_table(&dataset), Err(Error::EmptyDataset)));
    }
}
