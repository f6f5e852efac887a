//! Load → clean → save orchestration.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sales_ingest::{read_sales_table, write_sales_table};
use sales_model::Table;
use sales_transform::{StageReport, build_default_pipeline};

use crate::cli::Cli;

/// Outcome of one cleaning run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_written: usize,
    pub stages: Vec<StageReport>,
    pub cleaned: Table,
}

/// Load the raw table, run the six-stage pipeline, write the cleaned table.
///
/// There is no partial-success mode: the first failure aborts the run before
/// anything is written.
pub fn run_clean(args: &Cli) -> Result<RunResult> {
    let run_span = info_span!("clean", input = %args.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let raw =
        read_sales_table(&args.input).with_context(|| format!("load {}", args.input.display()))?;
    let rows_read = raw.height();

    let (cleaned, stages) = build_default_pipeline()
        .execute(raw)
        .context("run cleaning pipeline")?;

    write_sales_table(&args.output, &cleaned)
        .with_context(|| format!("save {}", args.output.display()))?;

    info!(
        rows_read,
        rows_written = cleaned.height(),
        stage_count = stages.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "cleaning complete"
    );

    Ok(RunResult {
        input: args.input.clone(),
        output: args.output.clone(),
        rows_read,
        rows_written: cleaned.height(),
        stages,
        cleaned,
    })
}
