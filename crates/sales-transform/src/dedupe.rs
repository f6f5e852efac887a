use std::collections::BTreeSet;

use sales_model::{Result, Table};

use crate::stage::CleaningStage;

/// Removes rows that are exact duplicates across every column, keeping the
/// first occurrence in row order.
pub struct Deduplicator;

impl CleaningStage for Deduplicator {
    fn apply(&self, table: &Table) -> Result<Table> {
        let mut seen = BTreeSet::new();
        let mut keep = Vec::with_capacity(table.height());
        for row in &table.rows {
            let key: Vec<String> = row.iter().map(ToString::to_string).collect();
            keep.push(seen.insert(key));
        }
        Ok(table.filter_rows(&keep))
    }

    fn stage_name(&self) -> &'static str {
        "deduplicator"
    }
}
