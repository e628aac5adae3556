//! perfilar CLI - Dataset Profiling and Quality Heuristics
//!
//! Command-line interface for perfilar operations.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod basic;
mod quality;
mod report;

/// perfilar - Dataset Profiling and Quality Heuristics in Pure Rust
#[derive(Parser)]
#[command(name = "perfilar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display dataset information
    Info {
        /// Path to dataset file
        path: PathBuf,
    },
    /// Display first N rows of a dataset
    Head {
        /// Path to dataset file
        path: PathBuf,
        /// Number of rows to display
        #[arg(short = 'n', long, default_value = "10")]
        rows: usize,
    },
    /// Display dataset schema
    Schema {
        /// Path to dataset file
        path: PathBuf,
    },
    /// Per-column statistics: kind, missing, distinct, numeric moments
    Summary {
        /// Path to dataset file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Missing-value table
    Missing {
        /// Path to dataset file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pearson correlation matrix over numeric columns
    Correlation {
        /// Path to dataset file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Top values of low-cardinality columns
    Categories {
        /// Path to dataset file
        path: PathBuf,
        /// Cardinality ceiling for a column to be reported
        #[arg(long, default_value = "20")]
        max_columns: usize,
        /// Number of top values to keep per column
        #[arg(long, default_value = "10")]
        top_k: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Quality flags and aggregate score
    Quality {
        /// Path to dataset file
        path: PathBuf,
        /// Weight of the average missing share (0.0 to 1.0)
        #[arg(long, default_value = "0.4")]
        missing_weight: f64,
        /// Weight of the constant-column fraction (0.0 to 1.0)
        #[arg(long, default_value = "0.3")]
        constant_weight: f64,
        /// Weight of the suspicious-ID fraction (0.0 to 1.0)
        #[arg(long, default_value = "0.3")]
        id_weight: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Full profile: summary, missing, correlation, categories, quality
    Report {
        /// Path to dataset file
        path: PathBuf,
        /// Cardinality ceiling for the categorical report
        #[arg(long, default_value = "20")]
        max_columns: usize,
        /// Number of top values to keep per column
        #[arg(long, default_value = "10")]
        top_k: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the perfilar CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { path } => basic::cmd_info(&path),
        Commands::Head { path, rows } => basic::cmd_head(&path, rows),
        Commands::Schema { path } => basic::cmd_schema(&path),
        Commands::Summary { path, json } => report::cmd_summary(&path, json),
        Commands::Missing { path, json } => report::cmd_missing(&path, json),
        Commands::Correlation { path, json } => report::cmd_correlation(&path, json),
        Commands::Categories {
            path,
            max_columns,
            top_k,
            json,
        } => report::cmd_categories(&path, max_columns, top_k, json),
        Commands::Quality {
            path,
            missing_weight,
            constant_weight,
            id_weight,
            json,
        } => quality::cmd_quality(&path, missing_weight, constant_weight, id_weight, json),
        Commands::Report {
            path,
            max_columns,
            top_k,
            json,
        } => report::cmd_report(&path, max_columns, top_k, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
