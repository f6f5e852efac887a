//! Run summary and preview rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::run::RunResult;

/// Print the run confirmation, per-stage row accounting, and a preview of
/// the first cleaned rows.
pub fn print_summary(result: &RunResult, preview_rows: usize) {
    println!("Cleaning complete.");
    println!(
        "Input:  {} ({} rows)",
        result.input.display(),
        result.rows_read
    );
    println!(
        "Output: {} ({} rows)",
        result.output.display(),
        result.rows_written
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in &result.stages {
        table.add_row(vec![
            Cell::new(report.stage),
            Cell::new(report.rows_in),
            Cell::new(report.rows_out),
            dropped_cell(report.rows_dropped()),
        ]);
    }
    println!("{table}");

    print_preview(result, preview_rows);
}

fn print_preview(result: &RunResult, preview_rows: usize) {
    if result.cleaned.height() == 0 || preview_rows == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        result
            .cleaned
            .columns
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in result.cleaned.rows.iter().take(preview_rows) {
        table.add_row(row.iter().map(ToString::to_string).collect::<Vec<_>>());
    }
    println!();
    println!("First rows:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
