use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bloodwork_core::{TrendChange, calculate_change, group_by_category};
use bloodwork_model::{Flag, MetricGroup, MetricReading};

use crate::types::ParseOutcome;

pub fn print_summary(outcome: &ParseOutcome) {
    print_file_table(outcome);
    print_metric_table(&outcome.groups);
    let result = &outcome.result;
    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("- {warning}");
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Readings, errors, warnings and per-file summaries as JSON on stdout.
pub fn print_json(outcome: &ParseOutcome) -> Result<()> {
    let json = serde_json::to_string_pretty(&outcome.result).context("serialize readings")?;
    println!("{json}");
    Ok(())
}

fn print_file_table(outcome: &ParseOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Collected"),
        header_cell("Readings"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_readings = 0usize;
    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for file in &outcome.result.files {
        total_readings += file.readings;
        total_errors += file.errors;
        total_warnings += file.warnings;
        table.add_row(vec![
            Cell::new(&file.source_file)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            file.date
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(file.readings),
            count_cell(file.errors, Color::Red),
            count_cell(file.warnings, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_readings).add_attribute(Attribute::Bold),
        count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if !outcome.window.is_unbounded() {
        println!(
            "Date window applied: {} readings kept",
            outcome.result.readings.len()
        );
    }
}

fn print_metric_table(groups: &[MetricGroup]) {
    if groups.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Metric"),
        header_cell("Collected"),
        header_cell("Result"),
        header_cell("Unit"),
        header_cell("Reference"),
        header_cell("Flag"),
        header_cell("Change"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Right);

    for (category, groups) in group_by_category(groups.to_vec()) {
        for group in &groups {
            let Some(latest) = group.latest() else {
                continue;
            };
            table.add_row(vec![
                Cell::new(&category).fg(Color::DarkGrey),
                Cell::new(&group.metric_name).add_attribute(Attribute::Bold),
                Cell::new(&latest.date),
                Cell::new(&latest.value_text),
                optional_cell(group.unit.as_deref()),
                optional_cell(latest.ref_text.as_deref()),
                flag_cell(latest),
                change_cell(calculate_change(&group.readings)),
            ]);
        }
    }
    println!();
    println!("Latest readings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn flag_cell(reading: &MetricReading) -> Cell {
    match reading.flag {
        Some(Flag::High) => Cell::new("HIGH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(Flag::Low) => Cell::new("LOW")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Some(Flag::Normal) => Cell::new("ok").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn change_cell(change: Option<TrendChange>) -> Cell {
    match change {
        Some(change) => Cell::new(format!("{:+.2} ({:+.1}%)", change.delta, change.percent)),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
