//! Everything a renderer needs, derived fresh from planner state

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::availability::{Availability, SessionStatus};
use crate::core::catalog::{Session, WorkArea};
use crate::core::planner::Planner;
use crate::core::stats::StatsSummary;
use crate::core::tasks::{AreaProgress, Task};
use crate::core::timer::format_elapsed;
use crate::core::view::View;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TimerView {
    pub(crate) running: bool,
    pub(crate) elapsed_seconds: u64,
    pub(crate) formatted: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionCard {
    pub(crate) session: Session,
    pub(crate) label: &'static str,
    pub(crate) time: &'static str,
    pub(crate) target_minutes: u32,
    pub(crate) status: SessionStatus,
    pub(crate) tasks: Vec<Task>,
    pub(crate) completed: usize,
    pub(crate) progress: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Snapshot {
    pub(crate) date: NaiveDate,
    pub(crate) weekday: String,
    pub(crate) weekend: bool,
    pub(crate) availability: Availability,
    pub(crate) selectable: Vec<Session>,
    pub(crate) view: View,
    pub(crate) selected_session: Option<Session>,
    pub(crate) draft_area: WorkArea,
    pub(crate) timer: TimerView,
    pub(crate) sessions: Vec<SessionCard>,
    pub(crate) weekly: StatsSummary,
    pub(crate) projects: Vec<AreaProgress>,
    /// Refusal message from the last command, if it changed nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notice: Option<String>,
}

impl Snapshot {
    pub(crate) fn card(&self, session: Session) -> Option<&SessionCard> {
        self.sessions.iter().find(|c| c.session == session)
    }
}

impl Planner {
    pub(crate) fn snapshot(&self) -> Snapshot {
        let sessions = Session::ALL
            .into_iter()
            .map(|session| SessionCard {
                session,
                label: session.label(),
                time: session.time_range(),
                target_minutes: session.target_minutes(),
                status: self.day.status(session),
                tasks: self.tasks.tasks(session).to_vec(),
                completed: self.tasks.completed_count(session),
                progress: self.tasks.progress(session),
            })
            .collect();

        Snapshot {
            date: self.day.date,
            weekday: self.day.date.weekday().to_string(),
            weekend: self.day.weekend,
            availability: self.day.availability,
            selectable: self.day.selectable_sessions(),
            view: self.view,
            selected_session: self.selected,
            draft_area: self.draft_area,
            timer: TimerView {
                running: self.timer.is_running(),
                elapsed_seconds: self.timer.elapsed_secs(),
                formatted: format_elapsed(self.timer.elapsed_secs()),
            },
            sessions,
            weekly: self.stats.summary(),
            projects: self.tasks.area_rollups(),
            notice: None,
        }
    }
}
