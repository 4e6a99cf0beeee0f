use std::fmt::Write as _;

use crate::core::Snapshot;
use crate::output::format::{
    RenderOptions, area_color, create_styled_table, header_cell, progress_bar, right_cell,
    styled_cell,
};

/// Weekly totals and per-area focus from the completed-session record
pub(crate) fn render_stats(snapshot: &Snapshot, options: RenderOptions) -> String {
    let use_color = options.use_color;
    let weekly = &snapshot.weekly;
    let mut out = String::new();

    let _ = writeln!(out, "\n  📈 This week");
    let _ = writeln!(
        out,
        "  {} sessions completed, {}h worked\n",
        weekly.completed_sessions, weekly.total_hours_rounded
    );

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Area", use_color),
        header_cell("Hours", use_color),
        header_cell("Share", use_color),
    ]);
    for row in &weekly.areas {
        let color = options.color(area_color(row.area));
        table.add_row(vec![
            styled_cell(&format!("{} {}", row.area.icon(), row.area.label()), color, false),
            right_cell(&format!("{}h", row.hours_rounded), None, false),
            styled_cell(
                &format!("{} {:.0}%", progress_bar(row.share_pct, 10), row.share_pct),
                color,
                false,
            ),
        ]);
    }
    let _ = writeln!(out, "{table}");
    out
}
