use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lead_cli::intake::{FileSummary, IntakeResult, rank};
use lead_model::NormalizedRecord;
use lead_model::fields::{BUSINESS_NAME, DIRECT_NAME};
use lead_scoring::score;

pub fn print_summary(result: &IntakeResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Type"),
        header_cell("Rule"),
        header_cell("Records"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_records = 0usize;
    for file in &result.files {
        total_records += file.records;
        table.add_row(vec![
            Cell::new(&file.filename),
            Cell::new(&file.type_hint),
            rule_cell(file),
            Cell::new(file.records),
            status_cell(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if result.records.len() != total_records {
        println!(
            "Kept {} of {} records after score filter.",
            result.records.len(),
            total_records
        );
    }
    let low_confidence = result.low_confidence_files();
    if low_confidence > 0 {
        eprintln!("{low_confidence} file(s) mapped with low confidence; see warnings above.");
    }
}

pub fn print_top(records: &[NormalizedRecord], limit: usize) {
    let ranked = rank(records);
    if ranked.is_empty() || limit == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Business"),
        header_cell("Score"),
        header_cell("Source"),
        header_cell("Why"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for (position, record) in ranked.into_iter().take(limit).enumerate() {
        let reasons = score(record)
            .insights
            .iter()
            .map(|insight| format!("{} (+{})", insight.label, insight.points))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(display_name(record)),
            score_cell(record.score),
            Cell::new(&record.source),
            Cell::new(reasons),
        ]);
    }
    println!();
    println!("Top records:");
    println!("{table}");
}

fn display_name(record: &NormalizedRecord) -> &str {
    [BUSINESS_NAME, DIRECT_NAME]
        .into_iter()
        .map(|key| record.value(key))
        .find(|value| !value.is_empty())
        .unwrap_or("-")
}

fn rule_cell(file: &FileSummary) -> Cell {
    match file.rule {
        Some(rule) => Cell::new(rule.label()),
        None => dim_cell("-"),
    }
}

fn status_cell(file: &FileSummary) -> Cell {
    if let Some(error) = &file.error {
        return Cell::new(error).fg(Color::Red).add_attribute(Attribute::Bold);
    }
    match file.warning {
        Some(warning) => Cell::new(warning.message()).fg(Color::Yellow),
        None => Cell::new("ok").fg(Color::Green),
    }
}

fn score_cell(score: u8) -> Cell {
    let color = match score {
        70.. => Color::Red,
        40..70 => Color::Yellow,
        _ => Color::Reset,
    };
    Cell::new(score).fg(color).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
