use std::fmt::Write as _;

use comfy_table::{Cell, Color};

use crate::core::Snapshot;
use crate::output::format::{
    RenderOptions, area_color, check_mark, create_styled_table, header_cell, progress_bar,
    right_cell, styled_cell,
};

pub(crate) fn render_session(snapshot: &Snapshot, options: RenderOptions) -> String {
    let mut out = String::new();
    let Some(card) = snapshot
        .selected_session
        .and_then(|session| snapshot.card(session))
    else {
        return out;
    };
    let use_color = options.use_color;

    let _ = writeln!(
        out,
        "\n  {} {}  ({})\n",
        card.session.icon(),
        card.label,
        card.time
    );

    let state = if snapshot.timer.running {
        "running"
    } else if snapshot.timer.elapsed_seconds > 0 {
        "paused"
    } else {
        "ready"
    };
    let _ = writeln!(
        out,
        "  ⏱  {}  [{}]  target {} min",
        snapshot.timer.formatted, state, card.target_minutes
    );
    let _ = writeln!(
        out,
        "  Progress {} {}%\n",
        progress_bar(f64::from(card.progress), 20),
        card.progress
    );

    if card.tasks.is_empty() {
        let _ = writeln!(out, "  📝 No tasks yet. Type 'add' to create one.\n");
        return out;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("", use_color),
        header_cell("Task", use_color),
        header_cell("Area", use_color),
    ]);
    for (i, task) in card.tasks.iter().enumerate() {
        let title_color = if task.completed {
            options.color(Color::DarkGrey)
        } else {
            None
        };
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            Cell::new(check_mark(task.completed)),
            styled_cell(&task.title, title_color, false),
            styled_cell(
                &format!("{} {}", task.area.icon(), task.area.label()),
                options.color(area_color(task.area)),
                false,
            ),
        ]);
    }
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "\n  {}/{} done. 'toggle {} <n>' flips a task.\n",
        card.completed,
        card.tasks.len(),
        card.session
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Planner, PlannerOptions, Session, WorkArea};
    use chrono::NaiveDate;

    fn planner() -> Planner {
        Planner::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            PlannerOptions::default(),
        )
    }

    #[test]
    fn nothing_rendered_without_selection() {
        assert!(render_session(&planner().snapshot(), RenderOptions::default()).is_empty());
    }

    #[test]
    fn shows_timer_target_and_empty_hint() {
        let mut p = planner();
        p.dispatch(Command::SelectSession(Session::Afternoon), 0);
        let out = render_session(&p.snapshot(), RenderOptions::default());
        assert!(out.contains("Afternoon Session"));
        assert!(out.contains("00:00:00  [ready]  target 240 min"));
        assert!(out.contains("No tasks yet"));
    }

    #[test]
    fn lists_numbered_tasks_with_area() {
        let mut p = planner();
        p.dispatch(Command::OpenAddTask(Some(Session::Morning)), 0);
        p.dispatch(
            Command::SubmitTask {
                title: "write abstract".to_string(),
                area: WorkArea::Paper,
            },
            0,
        );
        p.dispatch(Command::StartTimer, 0);
        p.advance(3000);
        p.dispatch(Command::PauseTimer, 3000);

        let out = render_session(&p.snapshot(), RenderOptions::default());
        assert!(out.contains("00:00:03  [paused]"));
        assert!(out.contains("write abstract"));
        assert!(out.contains("Academic Papers"));
        assert!(out.contains("0/1 done"));
    }
}
