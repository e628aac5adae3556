//! Top-K categorical value reporting.
//!
//! Counts value occurrences for columns under a cardinality ceiling and
//! keeps the most frequent values. Columns above the ceiling are left
//! out of the report entirely rather than truncated.

use std::collections::HashMap;

use arrow::array::Array;
use serde::Serialize;

use crate::{
    dataset::{ArrowDataset, Dataset},
    error::{Error, Result},
    summary::scalar_to_string,
};

/// A single value and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The observed value, rendered as text.
    pub value: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Top values for one reported column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnCategories {
    /// Column name.
    pub name: String,
    /// Up to `top_k` values, descending by count, ties by first appearance.
    pub values: Vec<CategoryCount>,
}

/// Top-K report over all qualifying columns, in dataset column order.
#[derive(Debug, Clone, Serialize)]
pub struct TopCategories {
    columns: Vec<ColumnCategories>,
}

impl TopCategories {
    /// All reported columns, in dataset column order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnCategories] {
        &self.columns
    }

    /// Look up a reported column by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnCategories> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of reported columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column qualified for the report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Report the most frequent values of low-cardinality columns.
///
/// A column qualifies when its distinct non-missing value count is at
/// most `max_columns`. For each qualifying column the first `top_k`
/// values are kept, sorted by descending count with ties resolved by
/// first-appearance order.
///
/// # Errors
///
/// Returns [`Error::EmptySchema`] for a zero-column dataset and
/// [`Error::EmptyDataset`] for a zero-row dataset.
pub fn top_categories(
    dataset: &ArrowDataset,
    max_columns: usize,
    top_k: usize,
) -> Result<TopCategories> {
    let schema = dataset.schema();
    if schema.fields().is_empty() {
        return Err(Error::EmptySchema);
    }
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut columns = Vec::new();

    for (col_idx, field) in schema.fields().iter().enumerate() {
        // value -> (count, first-seen position)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut position = 0usize;

        for batch in dataset.iter() {
            let array = batch.column(col_idx);
            for row in 0..array.len() {
                if let Some(value) = scalar_to_string(array, row) {
                    let entry = counts.entry(value).or_insert((0, position));
                    entry.0 += 1;
                }
                position += 1;
            }
        }

        if counts.len() > max_columns {
            continue;
        }

        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(value, (count, first_seen))| (value, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(top_k);

        columns.push(ColumnCategories {
            name: field.name().clone(),
            values: ranked
                .into_iter()
                .map(|(value, count, _)| CategoryCount { value, count })
                .collect(),
        });
    }

    Ok(TopCategories { columns })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Int32Array, RecordBatch, StringArray},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;

    fn city_dataset() -> ArrowDataset {
        let schema = Arc::new(Schema::new(vec![
            Field::new("city", DataType::Utf8, true),
            Field::new("visits", DataType::Int32, false),
        ]));

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec![
                    Some("A"),
                    Some("B"),
                    Some("A"),
                    None,
                ])),
                Arc::new(Int32Array::from(vec![1, 2, 3, 4])),
            ],
        )
        .unwrap();

        ArrowDataset::from_batch(batch).unwrap()
    }

    #[test]
    fn test_top_categories_counts_and_order() {
        let top = top_categories(&city_dataset(), 5, 2).unwrap();

        let city = top.get("city").unwrap();
        assert_eq!(city.values.len(), 2);
        assert_eq!(city.values[0], CategoryCount {
            value: "A".to_string(),
            count: 2
        });
        assert_eq!(city.values[1], CategoryCount {
            value: "B".to_string(),
            count: 1
        });
    }

    #[test]
    fn test_top_k_truncates() {
        let top = top_categories(&city_dataset(), 5, 1).unwrap();
        assert_eq!(top.get("city").unwrap().values.len(), 1);
    }

    #[test]
    fn test_ties_broken_by_first_appearance() {
        let schema = Arc::new(Schema::new(vec![Field::new("c", DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["y", "x", "y", "x", "z"]))],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        let top = top_categories(&dataset, 10, 3).unwrap();
        let values: Vec<&str> = top
            .get("c")
            .unwrap()
            .values
            .iter()
            .map(|v| v.value.as_str())
            .collect();
        // y and x tie at 2; y appeared first
        assert_eq!(values, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_high_cardinality_column_omitted() {
        let top = top_categories(&city_dataset(), 3, 10).unwrap();
        // visits has 4 distinct values, above the ceiling of 3
        assert!(top.get("visits").is_none());
        assert!(top.get("city").is_some());
    }

    #[test]
    fn test_numeric_column_can_qualify() {
        let top = top_categories(&city_dataset(), 5, 10).unwrap();
        let visits = top.get("visits").unwrap();
        assert_eq!(visits.values.len(), 4);
        assert!(visits.values.iter().all(|v| v.count == 1));
    }

    #[test]
    fn test_missing_values_not_counted() {
        let top = top_categories(&city_dataset(), 5, 10).unwrap();
        let city = top.get("city").unwrap();
        let total: usize = city.values.iter().map(|v| v.count).sum();
        // 4 rows, 1 null
        assert_eq!(total, 3);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Utf8, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(Vec::<Option<&str>>::new()))],
        )
        .unwrap();
        let dataset = ArrowDataset::from_batch(batch).unwrap();

        assert!(matches!(
            top_categories(&dataset, 5, 2),
            Err(Error::EmptyDataset)
        ));
    }
}
