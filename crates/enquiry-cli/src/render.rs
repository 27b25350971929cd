use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enquiry_model::{Directory, Entry};

pub fn directory_table(directory: &Directory) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Role"),
        header_cell("Location"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for entry in directory {
        table.add_row(vec![
            name_cell(entry),
            Cell::new(&entry.role),
            Cell::new(&entry.location),
            aliases_cell(entry),
        ]);
    }
    table
}

pub fn suggestion_table(scored: &[(&Entry, f64)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Role"),
        header_cell("Location"),
        header_cell("Similarity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (rank, (entry, ratio)) in scored.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            name_cell(entry),
            Cell::new(&entry.role),
            Cell::new(&entry.location),
            similarity_cell(*ratio),
        ]);
    }
    table
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

fn name_cell(entry: &Entry) -> Cell {
    Cell::new(&entry.full_name).add_attribute(Attribute::Bold)
}

fn aliases_cell(entry: &Entry) -> Cell {
    if entry.aliases.is_empty() {
        dim_cell("-")
    } else {
        let aliases: Vec<&str> = entry.aliases.iter().map(String::as_str).collect();
        Cell::new(aliases.join(", "))
    }
}

fn similarity_cell(ratio: f64) -> Cell {
    let cell = Cell::new(format!("{ratio:.2}"));
    if ratio > 0.6 {
        cell.fg(Color::Green)
    } else if ratio > 0.3 {
        cell.fg(Color::Yellow)
    } else {
        dim_cell(format!("{ratio:.2}"))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
