//! Quality CLI command.

use std::path::PathBuf;

use crate::{
    missing::missing_table,
    quality::{compute_quality_flags_with, ScoreWeights},
    summary::summarize_dataset,
};

use super::basic::load_dataset;

/// Compute and print quality flags for a dataset.
pub(crate) fn cmd_quality(
    path: &PathBuf,
    missing_weight: f64,
    constant_weight: f64,
    id_weight: f64,
    json: bool,
) -> crate::Result<()> {
    let dataset = load_dataset(path)?;

    let summary = summarize_dataset(&dataset)?;
    let missing = missing_table(&dataset)?;

    let weights = ScoreWeights::default()
        .with_missing(missing_weight)
        .with_constant(constant_weight)
        .with_id_duplicates(id_weight);

    let flags = compute_quality_flags_with(&summary, &missing, weights);

    if json {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "rows": summary.n_rows,
            "columns": summary.n_cols,
            "weights": weights,
            "flags": flags,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| crate::Error::Format(e.to_string()))?
        );
        return Ok(());
    }

    println!("Data Quality");
    println!("============");
    println!("File: {}", path.display());
    println!("Rows: {}", summary.n_rows);
    println!("Columns: {}", summary.n_cols);
    println!();
    println!("Quality Score: {:.3}", flags.quality_score);
    println!();

    if !flags.has_constant_columns && !flags.has_suspicious_id_duplicates {
        println!("\u{2713} No quality issues found");
        return Ok(());
    }

    if flags.has_constant_columns {
        println!("Constant columns:");
        for name in &flags.constant_columns {
            println!("  - {}", name);
        }
    }

    if flags.has_suspicious_id_duplicates {
        println!("Suspicious ID columns (duplicated values):");
        for name in &flags.suspicious_id_columns {
            println!("  - {}", name);
        }
    }

    Ok(())
}
