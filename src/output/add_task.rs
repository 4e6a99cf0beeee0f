use std::fmt::Write as _;

use comfy_table::Cell;

use crate::core::{Snapshot, WorkArea};
use crate::output::format::{
    RenderOptions, area_color, create_styled_table, header_cell, styled_cell,
};

pub(crate) fn render_add_task(snapshot: &Snapshot, options: RenderOptions) -> String {
    let use_color = options.use_color;
    let mut out = String::new();

    let target = snapshot
        .selected_session
        .map(|s| format!("{} {}", s.icon(), s.label()))
        .unwrap_or_else(|| "no session".to_string());
    let _ = writeln!(out, "\n  New task for {target}\n");

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("", use_color),
        header_cell("Area", use_color),
        header_cell("Id", use_color),
    ]);
    for area in WorkArea::ALL {
        let chosen = area == snapshot.draft_area;
        table.add_row(vec![
            Cell::new(if chosen { "●" } else { "○" }),
            styled_cell(
                &format!("{} {}", area.icon(), area.label()),
                options.color(area_color(area)),
                chosen,
            ),
            Cell::new(area.id()),
        ]);
    }
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "\n  'area <id>' to change, 'submit <title>' to add, 'back' to cancel.\n"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Planner, PlannerOptions, Session};
    use chrono::NaiveDate;

    #[test]
    fn marks_the_draft_area() {
        let mut p = Planner::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            PlannerOptions::default(),
        );
        p.dispatch(Command::OpenAddTask(Some(Session::Midday)), 0);
        p.dispatch(Command::ChooseArea(WorkArea::Book), 0);
        let out = render_add_task(&p.snapshot(), RenderOptions::default());
        assert!(out.contains("New task for"));
        assert!(out.contains("Late Morning Session"));
        let chosen = out.lines().find(|l| l.contains('●')).unwrap();
        assert!(chosen.contains("Book Writing"));
        assert_eq!(out.matches('○').count(), 4);
    }
}
