use std::fmt::Write as _;

use comfy_table::{Cell, Color};

use crate::consts::PREVIEW_TASKS;
use crate::core::{SessionCard, SessionStatus, Snapshot};
use crate::output::format::{
    RenderOptions, check_mark, create_styled_table, header_cell, progress_bar, right_cell,
    status_label, styled_cell,
};

/// First few task titles of a card, then "+N more"
fn task_preview(card: &SessionCard) -> String {
    if card.tasks.is_empty() {
        return "+ add a task".to_string();
    }
    let mut lines: Vec<String> = card
        .tasks
        .iter()
        .take(PREVIEW_TASKS)
        .map(|t| format!("{} {}", check_mark(t.completed), t.title))
        .collect();
    if card.tasks.len() > PREVIEW_TASKS {
        lines.push(format!("+{} more...", card.tasks.len() - PREVIEW_TASKS));
    }
    lines.join("\n")
}

fn date_header(snapshot: &Snapshot) -> String {
    snapshot.date.format("%b %-d (%a)").to_string()
}

pub(crate) fn render_home(snapshot: &Snapshot, options: RenderOptions) -> String {
    let use_color = options.use_color;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\n  {}  ·  {}  ·  {} sessions completed this week\n",
        date_header(snapshot),
        if snapshot.weekend {
            "Weekend focus"
        } else {
            "Weekday work"
        },
        snapshot.weekly.completed_sessions
    );

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Session", use_color),
        header_cell("Time", use_color),
        header_cell("Status", use_color),
        header_cell("Done", use_color),
        header_cell("Progress", use_color),
        header_cell("Tasks", use_color),
    ]);

    for card in &snapshot.sessions {
        let open = card.status == SessionStatus::Open;
        let status_color = if open {
            options.color(Color::Green)
        } else {
            options.color(Color::Red)
        };
        let has_tasks = !card.tasks.is_empty();
        table.add_row(vec![
            Cell::new(format!("{} {}", card.session.icon(), card.label)),
            Cell::new(card.time),
            styled_cell(status_label(card.status), status_color, false),
            right_cell(
                &if has_tasks {
                    format!("{}/{}", card.completed, card.tasks.len())
                } else {
                    "-".to_string()
                },
                None,
                false,
            ),
            Cell::new(if has_tasks {
                format!("{} {:>3}%", progress_bar(f64::from(card.progress), 10), card.progress)
            } else {
                String::new()
            }),
            Cell::new(if open { task_preview(card) } else { String::new() }),
        ]);
    }

    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "\n  This week: {}h worked, {} active projects\n",
        snapshot.weekly.total_hours_rounded, snapshot.weekly.active_projects
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Planner, PlannerOptions, Session, WorkArea};
    use chrono::NaiveDate;

    fn planner_on(y: i32, m: u32, d: u32) -> Planner {
        Planner::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), PlannerOptions::default())
    }

    fn add(p: &mut Planner, title: &str) {
        p.dispatch(Command::OpenAddTask(None), 0);
        p.dispatch(
            Command::SubmitTask {
                title: title.to_string(),
                area: WorkArea::Lecture,
            },
            0,
        );
    }

    #[test]
    fn header_shows_date_and_weekend_label() {
        let out = render_home(&planner_on(2026, 10, 18).snapshot(), RenderOptions::default());
        assert!(out.contains("Oct 18 (Sun)"));
        assert!(out.contains("Weekend focus"));
        assert!(out.contains("weekend"));
    }

    #[test]
    fn teaching_sessions_are_marked() {
        let out = render_home(&planner_on(2026, 3, 6).snapshot(), RenderOptions::default());
        assert!(out.contains("Weekday work"));
        assert!(out.contains("teaching"));
    }

    #[test]
    fn preview_lists_three_then_more() {
        let mut p = planner_on(2026, 10, 19);
        p.dispatch(Command::SelectSession(Session::Morning), 0);
        for title in ["one", "two", "three", "four", "five"] {
            add(&mut p, title);
        }
        let snap = p.snapshot();
        let preview = task_preview(snap.card(Session::Morning).unwrap());
        assert_eq!(preview.lines().count(), 4);
        assert!(preview.contains("three"));
        assert!(!preview.contains("four"));
        assert!(preview.ends_with("+2 more..."));
    }

    #[test]
    fn empty_card_invites_adding() {
        let snap = planner_on(2026, 10, 19).snapshot();
        assert_eq!(task_preview(snap.card(Session::Midday).unwrap()), "+ add a task");
    }
}
