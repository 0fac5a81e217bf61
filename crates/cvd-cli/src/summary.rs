use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cvd_core::format_count;
use cvd_model::CountryRecord;

use crate::types::RenderResult;

pub fn print_summary(result: &RenderResult) {
    println!("{}", result.page.title);
    println!("{}", result.page.heading);
    if let Some(icon) = &result.page.icon {
        println!("Icon: {}", icon.display());
    }
    println!("{}", columns_line(&result.columns));

    let subset = &result.pass.subset;
    if subset.is_empty() {
        println!("No rows in the dataset match the selected countries.");
    } else {
        println!("Selected countries");
        println!("{}", subset_table(subset.rows().iter()));
        println!("Ranked by total confirmed cases");
        println!("{}", subset_table(subset.ranked()));
    }

    if result.manifest.is_none() {
        return;
    }
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Chart"), header_cell("Writer"), header_cell("File")]);
    apply_table_style(&mut table);
    for written in &result.charts {
        table.add_row(vec![
            Cell::new(written.kind),
            dim_cell(written.writer),
            Cell::new(written.path.display()),
        ]);
    }
    match &result.map {
        Some(path) => table.add_row(vec![
            Cell::new("map"),
            dim_cell("-"),
            Cell::new(path.display()),
        ]),
        None => table.add_row(vec![
            Cell::new("map"),
            dim_cell("-"),
            dim_cell("skipped: no coordinates"),
        ]),
    };
    println!("{table}");
}

pub fn columns_line(columns: &[String]) -> String {
    format!("Available columns: {}", columns.join(", "))
}

pub fn subset_table<'a>(rows: impl Iterator<Item = &'a CountryRecord>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Total Confirmed"),
        header_cell("Total Deaths"),
        header_cell("Active Cases"),
        header_cell("Latitude"),
        header_cell("Longitude"),
        header_cell("Share of Deaths"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.country).add_attribute(Attribute::Bold),
            count_cell(row.total_confirmed),
            count_cell(row.total_deaths),
            count_cell(row.active_cases),
            coordinate_cell(row.latitude),
            coordinate_cell(row.longitude),
            match row.death_proportion {
                Some(share) => Cell::new(format!("{:.1}%", share * 100.0)),
                None => dim_cell("-"),
            },
        ]);
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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

fn count_cell(count: Option<i64>) -> Cell {
    match count {
        Some(_) => Cell::new(format_count(count)),
        None => dim_cell(format_count(count)),
    }
}

fn coordinate_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.4}")),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
