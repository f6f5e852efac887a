use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use sales_model::{Table, Value};

/// Empty cells are the only ones mapped to `Missing` at ingest time; any
/// other text (including whitespace-only cells) is preserved verbatim for
/// the stages to normalize.
fn cell_value(raw: &str) -> Value {
    if raw.is_empty() {
        Value::Missing
    } else {
        Value::Text(raw.to_string())
    }
}

/// Read a delimited sales table with a header row.
///
/// Header names are kept as they appear in the file (stray spaces and mixed
/// case included) apart from a BOM strip on the first header cell. Rows
/// shorter than the header are padded with `Missing`; longer rows are
/// truncated to the header width. Fully blank rows are skipped.
pub fn read_sales_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .clone();
    let mut columns: Vec<String> = headers.iter().map(ToString::to_string).collect();
    if let Some(first) = columns.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.width());
        for idx in 0..table.width() {
            row.push(cell_value(record.get(idx).unwrap_or("")));
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "csv loaded"
    );
    Ok(table)
}

/// Write the cleaned table as CSV: header row first, no index column.
///
/// Cells use the output rendering (`Missing` becomes an empty field). The
/// destination directory must already exist; a missing directory is a
/// propagated error, not something to create on the fly.
pub fn write_sales_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        "csv written"
    );
    Ok(())
}
