//! Profiling CLI commands.

use std::path::PathBuf;

use crate::{
    categorical::top_categories,
    correlation::{correlation_matrix, CorrelationMatrix},
    missing::missing_table,
    profile::{profile_dataset, DatasetProfile, ProfileOptions},
    quality::QualityFlags,
    summary::{flatten_summary_for_print, summarize_dataset, SummaryRow},
};

use super::basic::load_dataset;

fn to_json_pretty<T: serde::Serialize>(value: &T) -> crate::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| crate::Error::Format(e.to_string()))
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}

fn print_summary_rows(rows: &[SummaryRow]) {
    println!(
        "{:<24} {:<12} {:>8} {:>14} {:>9} {:>12} {:>12} {:>12}",
        "name", "kind", "missing", "missing_share", "distinct", "min", "max", "mean"
    );
    for row in rows {
        println!(
            "{:<24} {:<12} {:>8} {:>14.4} {:>9} {:>12} {:>12} {:>12}",
            row.name,
            row.kind.name(),
            row.missing_count,
            row.missing_share,
            row.distinct_count,
            fmt_opt(row.min),
            fmt_opt(row.max),
            fmt_opt(row.mean),
        );
    }
}

fn print_correlation(matrix: &CorrelationMatrix) {
    if matrix.is_empty() {
        println!("Fewer than two numeric columns; nothing to correlate");
        return;
    }

    print!("{:<24}", "");
    for name in matrix.columns() {
        print!(" {:>12}", name);
    }
    println!();

    for (i, name) in matrix.columns().iter().enumerate() {
        print!("{:<24}", name);
        for value in &matrix.values()[i] {
            if value.is_nan() {
                print!(" {:>12}", "NaN");
            } else {
                print!(" {:>12.4}", value);
            }
        }
        println!();
    }
}

fn print_flags(flags: &QualityFlags) {
    println!("Quality Score: {:.3}", flags.quality_score);
    println!();

    if flags.has_constant_columns {
        println!("Constant columns:");
        for name in &flags.constant_columns {
            println!("  - {}", name);
        }
    } else {
        println!("No constant columns");
    }

    if flags.has_suspicious_id_duplicates {
        println!("Suspicious ID columns (duplicated values):");
        for name in &flags.suspicious_id_columns {
            println!("  - {}", name);
        }
    } else {
        println!("No suspicious ID duplicates");
    }
}

/// Print per-column statistics.
pub(crate) fn cmd_summary(path: &PathBuf, json: bool) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let summary = summarize_dataset(&dataset)?;

    if json {
        println!("{}", to_json_pretty(&summary)?);
        return Ok(());
    }

    println!("Dataset: {} rows, {} columns", summary.n_rows, summary.n_cols);
    println!();
    print_summary_rows(&flatten_summary_for_print(&summary));

    Ok(())
}

/// Print the missing-value table.
pub(crate) fn cmd_missing(path: &PathBuf, json: bool) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let table = missing_table(&dataset)?;

    if json {
        println!("{}", to_json_pretty(&table)?);
        return Ok(());
    }

    println!("{:<24} {:>13} {:>14}", "name", "missing_count", "missing_share");
    for entry in table.entries() {
        println!(
            "{:<24} {:>13} {:>14.4}",
            entry.name, entry.missing_count, entry.missing_share
        );
    }

    Ok(())
}

/// Print the correlation matrix.
pub(crate) fn cmd_correlation(path: &PathBuf, json: bool) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let matrix = correlation_matrix(&dataset)?;

    if json {
        println!("{}", to_json_pretty(&matrix)?);
        return Ok(());
    }

    print_correlation(&matrix);
    Ok(())
}

/// Print top categorical values.
pub(crate) fn cmd_categories(
    path: &PathBuf,
    max_columns: usize,
    top_k: usize,
    json: bool,
) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let top = top_categories(&dataset, max_columns, top_k)?;

    if json {
        println!("{}", to_json_pretty(&top)?);
        return Ok(());
    }

    if top.is_empty() {
        println!("No column under {} distinct values", max_columns);
        return Ok(());
    }

    for column in top.columns() {
        println!("{}:", column.name);
        for entry in &column.values {
            println!("  {:<20} {:>8}", entry.value, entry.count);
        }
        println!();
    }

    Ok(())
}

/// Print a full profile.
pub(crate) fn cmd_report(
    path: &PathBuf,
    max_columns: usize,
    top_k: usize,
    json: bool,
) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let options = ProfileOptions {
        max_columns,
        top_k,
        ..ProfileOptions::default()
    };
    let profile = profile_dataset(&dataset, &options)?;

    if json {
        println!("{}", to_json_pretty(&profile)?);
        return Ok(());
    }

    print_report(path, &profile);
    Ok(())
}

fn print_report(path: &PathBuf, profile: &DatasetProfile) {
    let DatasetProfile {
        summary,
        missing,
        correlation,
        top_categories,
        flags,
    } = profile;

    println!("Dataset Profile");
    println!("===============");
    println!("File: {}", path.display());
    println!("Rows: {}", summary.n_rows);
    println!("Columns: {}", summary.n_cols);
    println!();

    println!("Column Summary");
    println!("--------------");
    print_summary_rows(&flatten_summary_for_print(summary));
    println!();

    let with_missing = missing
        .entries()
        .iter()
        .filter(|e| e.missing_count > 0)
        .count();
    println!("Columns with missing values: {}", with_missing);
    println!();

    println!("Correlation");
    println!("-----------");
    print_correlation(correlation);
    println!();

    if !top_categories.is_empty() {
        println!("Top Categories");
        println!("--------------");
        for column in top_categories.columns() {
            let preview: Vec<String> = column
                .values
                .iter()
                .map(|v| format!("{} ({})", v.value, v.count))
                .collect();
            println!("  {:<24} {}", column.name, preview.join(", "));
        }
        println!();
    }

    println!("Quality");
    println!("-------");
    print_flags(flags);
}
