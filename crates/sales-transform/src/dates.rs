use sales_model::{Result, Table, Value};

use crate::normalization::datetime::parse_date;
use crate::stage::CleaningStage;

/// Parses `date_sold` into typed calendar dates and drops rows whose date
/// cannot be parsed. Tables without a `date_sold` column pass through
/// unchanged.
pub struct DateNormalizer;

fn parse_cell(value: &Value) -> Value {
    match value {
        Value::Date(date) => Value::Date(*date),
        Value::Missing => Value::Missing,
        other => match parse_date(&other.to_text()) {
            Some(date) => Value::Date(date),
            None => Value::Missing,
        },
    }
}

impl CleaningStage for DateNormalizer {
    fn apply(&self, table: &Table) -> Result<Table> {
        let Some(index) = table.column_index("date_sold") else {
            return Ok(table.clone());
        };
        let parsed = table.map_column(index, parse_cell);
        let keep: Vec<bool> = parsed
            .rows
            .iter()
            .map(|row| !row[index].is_missing())
            .collect();
        Ok(parsed.filter_rows(&keep))
    }

    fn stage_name(&self) -> &'static str {
        "date_normalizer"
    }
}
