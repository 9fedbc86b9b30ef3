use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sid_model::{IssueSeverity, LineItem, ValidationReport};

use crate::types::SimulateResult;

pub fn print_simulation(result: &SimulateResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Item Details"),
        header_cell("Quantity"),
        header_cell("Rate"),
        header_cell("Amount"),
        header_cell("Self Use"),
        header_cell("Chargeable"),
        header_cell("Returnable"),
        header_cell("Purpose"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Center);
    for row in &result.rows {
        table.add_row(vec![
            Cell::new(row.key),
            description_cell(row),
            Cell::new(&row.quantity),
            Cell::new(&row.rate),
            Cell::new(&row.amount),
            flag_cell(row.self_use),
            flag_cell(row.chargeable),
            flag_cell(row.returnable),
            Cell::new(&row.purpose),
        ]);
    }
    eprintln!("{table}");
    eprintln!(
        "{} row(s), {} issued item(s), {} notification(s)",
        result.rows.len(),
        result.items.len(),
        result.notifications
    );
}

pub fn print_validation(report: &ValidationReport) {
    eprintln!("Screen: {}", report.screen);
    if report.issues.is_empty() {
        eprintln!("No findings.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.field.clone().unwrap_or_else(|| "-".to_string())),
            Cell::new(&issue.code),
            Cell::new(&issue.message),
        ]);
    }
    eprintln!("{table}");
    eprintln!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
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

fn description_cell(row: &LineItem) -> Cell {
    if row.is_bound() {
        Cell::new(&row.description)
    } else {
        dim_cell("Select Material")
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
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
