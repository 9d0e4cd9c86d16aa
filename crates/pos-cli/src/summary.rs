use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: none (dry run)"),
        None => {}
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Rows read"), Cell::new(result.rows_read)]);
    table.add_row(vec![
        Cell::new("Transactions"),
        Cell::new(result.transactions),
    ]);
    table.add_row(vec![
        Cell::new("Basket items"),
        Cell::new(result.basket_items),
    ]);
    let skipped_cell = if result.failures.is_empty() {
        Cell::new(0)
    } else {
        Cell::new(result.failures.len()).fg(comfy_table::Color::Red)
    };
    table.add_row(vec![Cell::new("Rows skipped"), skipped_cell]);
    println!("{table}");

    for failure in &result.failures {
        eprintln!("warning: row {} skipped: {}", failure.row, failure.message);
    }
}

fn header_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
