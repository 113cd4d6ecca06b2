use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CheckResult, ConvertResult, RowStatus};

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Club: {}", result.club);
    println!("Output: {}", result.output.display());
    println!(
        "Rows: {} ({} exportable), athletes: {}, relays: {}, entries: {}",
        result.rows.len(),
        result.rows.len() - result.flagged(),
        result.athletes,
        result.relays,
        result.entries
    );
    print_issue_table(&result.rows);
    // Issue-based exclusions and build-time skips are distinct counts; both
    // surface as one aggregate warning.
    if result.flagged() > 0 || result.skipped > 0 {
        eprintln!(
            "warning: {} row(s) excluded by validation issues, {} skipped during build",
            result.flagged(),
            result.skipped
        );
    }
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Club: {}", result.club);
    println!(
        "Rows: {}, exportable: {}, flagged: {}",
        result.rows.len(),
        result.exportable(),
        result.flagged()
    );
    print_issue_table(&result.rows);
}

fn print_issue_table(rows: &[RowStatus]) {
    let flagged: Vec<&RowStatus> = rows.iter().filter(|status| !status.is_exportable()).collect();
    if flagged.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Event"),
        header_cell("Name"),
        header_cell("Issues"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in flagged {
        let issues = status
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        let name = format!("{} {}", status.row.last_name, status.row.first_name);
        table.add_row(vec![
            Cell::new(status.row.line),
            event_cell(status.row.event_number),
            Cell::new(name.trim_end()),
            Cell::new(issues).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Flagged rows:");
    println!("{table}");
}

fn event_cell(event: Option<u32>) -> Cell {
    match event {
        Some(number) => Cell::new(number),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
