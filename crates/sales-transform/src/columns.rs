use sales_model::{Result, Table};

use crate::stage::CleaningStage;

/// Standardizes column names: strip surrounding whitespace, lowercase,
/// spaces to underscores. Idempotent; a zero-column table passes through.
pub struct ColumnNormalizer;

/// Normalize a single raw column name.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

impl CleaningStage for ColumnNormalizer {
    fn apply(&self, table: &Table) -> Result<Table> {
        let columns = table
            .columns
            .iter()
            .map(|name| normalize_column_name(name))
            .collect();
        Ok(table.with_columns(columns))
    }

    fn stage_name(&self) -> &'static str {
        "column_normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_lowercases_and_underscores() {
        assert_eq!(normalize_column_name(" ProdName "), "prodname");
        assert_eq!(normalize_column_name(" CATEGORY "), "category");
        assert_eq!(normalize_column_name("Date Sold"), "date_sold");
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let once = normalize_column_name(" Date  Sold ");
        assert_eq!(normalize_column_name(&once), once);
    }

    #[test]
    fn zero_column_table_passes_through() {
        let table = Table::new(Vec::new());
        let renamed = ColumnNormalizer.apply(&table).unwrap();
        assert_eq!(renamed, table);
    }
}
