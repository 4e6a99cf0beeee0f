use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{SessionStatus, WorkArea};

/// Settings shared by every text renderer
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    pub(crate) use_color: bool,
}

impl RenderOptions {
    pub(super) fn color(self, color: Color) -> Option<Color> {
        if self.use_color { Some(color) } else { None }
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Terminal color for a work area's color tag
pub(super) fn area_color(area: WorkArea) -> Color {
    match area.color() {
        "blue" => Color::Blue,
        "purple" => Color::Magenta,
        "green" => Color::Green,
        "amber" => Color::Yellow,
        "pink" => Color::Red,
        _ => Color::White,
    }
}

pub(super) fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Open => "open",
        SessionStatus::Teaching => "teaching",
        SessionStatus::Weekend => "weekend",
    }
}

/// Fixed-width text bar for a percentage. Values above 100 fill the bar.
pub(super) fn progress_bar(pct: f64, width: usize) -> String {
    let filled = if pct.is_nan() || pct <= 0.0 {
        0
    } else {
        ((pct / 100.0 * width as f64).round() as usize).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub(super) fn check_mark(done: bool) -> &'static str {
    if done { "✅" } else { "⬜" }
}
