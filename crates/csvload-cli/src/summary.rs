use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ImportOutcome;

pub fn print_summary(outcome: &ImportOutcome) {
    let summary = &outcome.summary;
    println!("Table: {}", summary.table);
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none (validate only)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Destination"),
    ]);
    apply_table_style(&mut table);
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(&column.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            match &column.data_type {
                Some(data_type) => Cell::new(data_type),
                None => dim_cell("-"),
            },
            match &column.destination {
                Some(destination) => Cell::new(destination).fg(Color::Green),
                None => dim_cell("dropped"),
            },
        ]);
    }
    println!("{table}");

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Rows"),
        header_cell("Cells written"),
        header_cell("Cells dropped"),
    ]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 0, CellAlignment::Right);
    align_column(&mut totals, 1, CellAlignment::Right);
    align_column(&mut totals, 2, CellAlignment::Right);
    totals.add_row(vec![
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
        Cell::new(summary.cells_written),
        match summary.dropped_cells {
            0 => dim_cell(0),
            dropped => Cell::new(dropped).fg(Color::Yellow),
        },
    ]);
    println!("{totals}");
}

pub fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
