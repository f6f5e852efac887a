//! CLI argument definitions for the sales cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sales-cleaner",
    version,
    about = "Clean a raw sales CSV into an analysis-ready dataset",
    long_about = "Run the fixed six-stage cleaning pipeline over a raw sales CSV:\n\
                  normalize column names and categories, parse sale dates, coerce\n\
                  numeric fields, drop invalid rows, and remove exact duplicates."
)]
pub struct Cli {
    /// Path to the raw sales CSV.
    #[arg(value_name = "INPUT", default_value = "data/raw/sales_data_raw.csv")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (the directory must exist).
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "data/processed/sales_data_clean.csv"
    )]
    pub output: PathBuf,

    /// How many cleaned rows to show in the preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
