use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use tm_common::any_to_optional_string;

use crate::types::{DictionaryResult, LccnResult, OnboardResult, TimeDistResult};

pub fn print_onboard_summary(result: &OnboardResult) {
    println!("Source: {}", result.source);
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Files"), header_cell("Columns")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    table.add_row(vec![
        count_cell(result.files, result.files),
        Cell::new("file_name, content"),
    ]);
    println!("{table}");
}

pub fn print_lccn_summary(result: &LccnResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Matched"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut rows = vec![("date", result.with_date), ("publication_ref", result.with_ref)];
    if let Some(with_name) = result.with_name {
        rows.push(("publication_name", with_name));
    }
    for (column, matched) in rows {
        let missing = result.rows - matched;
        table.add_row(vec![
            column_cell(column),
            count_cell(matched, result.rows),
            missing_cell(missing),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL ROWS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_time_dist_summary(result: &TimeDistResult) {
    println!(
        "Periodicity: {} ({} records, {} groups)",
        result.periodicity,
        result.records,
        result.frame.height()
    );
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
        return;
    }
    println!("{}", frame_table(&result.frame));
}

pub fn print_dictionary_summary(result: &DictionaryResult) {
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Documents"),
        header_cell("Positions"),
        header_cell("Non-zeros"),
        header_cell("Tokens"),
        header_cell("Removed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.num_docs),
        Cell::new(result.num_pos),
        Cell::new(result.num_nnz),
        Cell::new(result.tokens).add_attribute(Attribute::Bold),
        match result.removed {
            Some(removed) => missing_cell(removed),
            None => dim_cell("-"),
        },
    ]);
    println!("{table}");

    if result.most_common.is_empty() {
        return;
    }
    let mut common = Table::new();
    common.set_header(vec![header_cell("Token"), header_cell("Frequency")]);
    apply_table_style(&mut common);
    align_column(&mut common, 1, CellAlignment::Right);
    for (token, frequency) in &result.most_common {
        common.add_row(vec![Cell::new(token), Cell::new(frequency)]);
    }
    println!("{common}");
}

/// Render every cell of a frame; nulls show as a dimmed dash.
pub fn frame_table(frame: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        frame
            .get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in frame.get_columns().iter().enumerate() {
        if column.dtype().is_numeric() {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in 0..frame.height() {
        let cells = frame
            .get_columns()
            .iter()
            .map(|column| {
                match column.get(row).ok().and_then(any_to_optional_string) {
                    Some(value) => Cell::new(value),
                    None => dim_cell("-"),
                }
            })
            .collect::<Vec<_>>();
        table.add_row(cells);
    }
    table
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, total: usize) -> Cell {
    match count {
        0 => dim_cell(count),
        value if value == total => Cell::new(value).fg(Color::Green),
        value => Cell::new(value),
    }
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
