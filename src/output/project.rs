use std::fmt::Write as _;

use crate::core::Snapshot;
use crate::output::format::{
    RenderOptions, area_color, create_styled_table, header_cell, progress_bar, right_cell,
    styled_cell,
};

/// Task completion per work area, across every session
pub(crate) fn render_projects(snapshot: &Snapshot, options: RenderOptions) -> String {
    let use_color = options.use_color;
    let mut out = String::new();
    let _ = writeln!(out, "\n  📊 Projects in progress\n");

    if snapshot.projects.is_empty() {
        let _ = writeln!(out, "  No tasks yet.\n");
        return out;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Area", use_color),
        header_cell("Done", use_color),
        header_cell("Progress", use_color),
    ]);
    for rollup in &snapshot.projects {
        let color = options.color(area_color(rollup.area));
        table.add_row(vec![
            styled_cell(
                &format!("{} {}", rollup.area.icon(), rollup.area.label()),
                color,
                false,
            ),
            right_cell(&format!("{}/{}", rollup.completed, rollup.total), None, false),
            styled_cell(
                &format!(
                    "{} {:>3}%",
                    progress_bar(f64::from(rollup.percent), 10),
                    rollup.percent
                ),
                color,
                false,
            ),
        ]);
    }
    let _ = writeln!(out, "{table}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Planner, PlannerOptions, Session, WorkArea};
    use chrono::NaiveDate;

    #[test]
    fn empty_store_has_no_table() {
        let p = Planner::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            PlannerOptions::default(),
        );
        let out = render_projects(&p.snapshot(), RenderOptions::default());
        assert!(out.contains("No tasks yet"));
    }

    #[test]
    fn only_areas_with_tasks_are_listed() {
        let mut p = Planner::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            PlannerOptions::default(),
        );
        p.dispatch(Command::OpenAddTask(Some(Session::Morning)), 0);
        for title in ["a", "b", "c"] {
            p.dispatch(
                Command::SubmitTask {
                    title: title.to_string(),
                    area: WorkArea::Research,
                },
                0,
            );
            p.dispatch(Command::OpenAddTask(None), 0);
        }
        p.dispatch(
            Command::ToggleTask {
                session: Session::Morning,
                index: 1,
            },
            0,
        );
        let out = render_projects(&p.snapshot(), RenderOptions::default());
        assert!(out.contains("Research & Development"));
        assert!(out.contains("1/3"));
        assert!(out.contains("33%"));
        assert!(!out.contains("Lecture Prep"));
    }
}
