use sales_model::{CleanError, Result, Table, Value};

use crate::normalization::numeric::{parse_f64, parse_i64};
use crate::normalization::text::title_case;
use crate::stage::CleaningStage;

const STAGE: &str = "missing_value_handler";

/// Tidies product names and coerces the numeric columns.
///
/// `prodname` is optional; `price` and `qty` are hard dependencies and
/// their absence is an error. Rows where either numeric fails to parse are
/// dropped.
pub struct MissingValueHandler;

fn tidy_prodname(value: &Value) -> Value {
    Value::Text(title_case(&value.to_text()))
}

fn coerce_price(value: &Value) -> Value {
    match value {
        Value::Number(_) | Value::Integer(_) => value.clone(),
        Value::Missing => Value::Missing,
        other => match parse_f64(&other.to_text()) {
            Some(number) => Value::Number(number),
            None => Value::Missing,
        },
    }
}

fn coerce_qty(value: &Value) -> Value {
    match value {
        Value::Number(_) | Value::Integer(_) => value.clone(),
        Value::Missing => Value::Missing,
        other => {
            let text = other.to_text();
            if let Some(integer) = parse_i64(&text) {
                return Value::Integer(integer);
            }
            match parse_f64(&text) {
                // integral floats like "2.0" collapse to an integer qty
                Some(number) if (number as i64) as f64 == number => {
                    Value::Integer(number as i64)
                }
                Some(number) => Value::Number(number),
                None => Value::Missing,
            }
        }
    }
}

fn require_column(table: &Table, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| CleanError::MissingColumn {
            stage: STAGE,
            column: column.to_string(),
        })
}

impl CleaningStage for MissingValueHandler {
    fn apply(&self, table: &Table) -> Result<Table> {
        let mut current = table.clone();
        if let Some(index) = current.column_index("prodname") {
            current = current.map_column(index, tidy_prodname);
        }
        let price = require_column(&current, "price")?;
        let qty = require_column(&current, "qty")?;
        current = current.map_column(price, coerce_price);
        current = current.map_column(qty, coerce_qty);
        let keep: Vec<bool> = current
            .rows
            .iter()
            .map(|row| !row[price].is_missing() && !row[qty].is_missing())
            .collect();
        Ok(current.filter_rows(&keep))
    }

    fn stage_name(&self) -> &'static str {
        STAGE
    }
}
