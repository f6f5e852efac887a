//! Cleaning pipeline with ordered stage execution.
//!
//! Each stage implements the [`CleaningStage`] trait and is executed in a
//! fixed order by [`CleaningPipeline`]. Stages are pure: they take the
//! current table by reference and return a fresh one.

use std::time::Instant;

use tracing::debug;

use sales_model::{Result, Table};

use crate::category::CategoryNormalizer;
use crate::columns::ColumnNormalizer;
use crate::dates::DateNormalizer;
use crate::dedupe::Deduplicator;
use crate::missing::MissingValueHandler;
use crate::validate::RowValidator;

/// A single cleaning stage over the in-memory table.
pub trait CleaningStage: Send + Sync {
    /// Apply this stage, returning a new table.
    ///
    /// Stages with a hard column dependency return an error when the column
    /// is absent; stages with optional dependencies pass the table through
    /// unchanged instead.
    fn apply(&self, table: &Table) -> Result<Table>;

    /// Human-readable name for this stage (for logging and the run summary).
    fn stage_name(&self) -> &'static str;
}

/// Row accounting for one executed stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: &'static str,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// An ordered pipeline of cleaning stages.
pub struct CleaningPipeline {
    stages: Vec<Box<dyn CleaningStage>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage(mut self, stage: Box<dyn CleaningStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// List stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.stage_name()).collect()
    }

    /// Execute all stages in order.
    ///
    /// Returns the final table and the per-stage row accounting. The first
    /// stage error aborts the run; no partially-cleaned table escapes.
    pub fn execute(&self, table: Table) -> Result<(Table, Vec<StageReport>)> {
        let mut current = table;
        let mut reports = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            let start = Instant::now();
            let rows_in = current.height();
            let next = stage.apply(&current)?;
            let report = StageReport {
                stage: stage.stage_name(),
                rows_in,
                rows_out: next.height(),
            };
            debug!(
                stage = report.stage,
                rows_in = report.rows_in,
                rows_out = report.rows_out,
                duration_ms = start.elapsed().as_millis(),
                "stage complete"
            );
            reports.push(report);
            current = next;
        }
        Ok((current, reports))
    }
}

/// Build the fixed six-stage cleaning pipeline.
///
/// The order is load-bearing: the row validator compares numerics the
/// missing-value handler coerced, and the deduplicator sees fully
/// normalized rows.
pub fn build_default_pipeline() -> CleaningPipeline {
    CleaningPipeline::new()
        .add_stage(Box::new(ColumnNormalizer))
        .add_stage(Box::new(CategoryNormalizer))
        .add_stage(Box::new(DateNormalizer))
        .add_stage(Box::new(MissingValueHandler))
        .add_stage(Box::new(RowValidator))
        .add_stage(Box::new(Deduplicator))
}
