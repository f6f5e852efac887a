use sales_model::{CleanError, Result, Table, Value};

use crate::stage::CleaningStage;

const STAGE: &str = "row_validator";

/// Drops rows whose price or qty is zero or negative.
///
/// Runs after numeric coercion; a cell that is still non-numeric here is a
/// pipeline ordering bug and surfaces as an error rather than a silent
/// comparison.
pub struct RowValidator;

fn numeric(value: &Value, column: &str) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| CleanError::NonNumericColumn {
            stage: STAGE,
            column: column.to_string(),
        })
}

impl CleaningStage for RowValidator {
    fn apply(&self, table: &Table) -> Result<Table> {
        let price = table
            .column_index("price")
            .ok_or_else(|| CleanError::MissingColumn {
                stage: STAGE,
                column: "price".to_string(),
            })?;
        let qty = table
            .column_index("qty")
            .ok_or_else(|| CleanError::MissingColumn {
                stage: STAGE,
                column: "qty".to_string(),
            })?;
        let mut keep = Vec::with_capacity(table.height());
        for row in &table.rows {
            let price_value = numeric(&row[price], "price")?;
            let qty_value = numeric(&row[qty], "qty")?;
            keep.push(price_value > 0.0 && qty_value > 0.0);
        }
        Ok(table.filter_rows(&keep))
    }

    fn stage_name(&self) -> &'static str {
        STAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_table(rows: Vec<(f64, i64)>) -> Table {
        let mut table = Table::new(vec!["price".to_string(), "qty".to_string()]);
        for (price, qty) in rows {
            table.push_row(vec![Value::Number(price), Value::Integer(qty)]);
        }
        table
    }

    #[test]
    fn drops_zero_and_negative_rows() {
        let table = numeric_table(vec![(150.0, 2), (-10.0, 1), (30.0, 0), (0.0, 5)]);
        let cleaned = RowValidator.apply(&table).unwrap();
        assert_eq!(cleaned.height(), 1);
        assert_eq!(cleaned.rows[0][0], Value::Number(150.0));
    }

    #[test]
    fn non_numeric_cell_is_fatal() {
        let mut table = Table::new(vec!["price".to_string(), "qty".to_string()]);
        table.push_row(vec![Value::Text("150".to_string()), Value::Integer(1)]);
        let error = RowValidator.apply(&table).unwrap_err();
        assert!(matches!(
            error,
            CleanError::NonNumericColumn { column, .. } if column == "price"
        ));
    }

    #[test]
    fn missing_qty_column_is_fatal() {
        let table = Table::new(vec!["price".to_string()]);
        let error = RowValidator.apply(&table).unwrap_err();
        assert!(matches!(
            error,
            CleanError::MissingColumn { column, .. } if column == "qty"
        ));
    }
}
