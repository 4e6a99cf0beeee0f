//! The planner state machine
//!
//! One owned value holds everything: today's availability, the current view,
//! the selected session, the timer, the task store and the weekly totals.
//! Commands mutate it in place and report whether they applied.

use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, info};

use crate::clock::Ticker;
use crate::core::availability::{DayPlan, SessionStatus};
use crate::core::catalog::{Session, WorkArea};
use crate::core::stats::{AreaHours, WeeklyStats};
use crate::core::tasks::TaskStore;
use crate::core::timer::Timer;
use crate::core::view::{View, ViewTarget};

/// Commands accepted from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SelectSession(Session),
    StartTimer,
    PauseTimer,
    CompleteTimer,
    BackFromSession,
    /// `Some` from a home card with no tasks, `None` from the session view
    OpenAddTask(Option<Session>),
    ChooseArea(WorkArea),
    SubmitTask { title: String, area: WorkArea },
    BackFromAddTask,
    ToggleTask { session: Session, index: usize },
    OpenView(ViewTarget),
}

impl Command {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Command::SelectSession(_) => "select",
            Command::StartTimer => "start",
            Command::PauseTimer => "pause",
            Command::CompleteTimer => "complete",
            Command::BackFromSession | Command::BackFromAddTask => "back",
            Command::OpenAddTask(_) => "add",
            Command::ChooseArea(_) => "area",
            Command::SubmitTask { .. } => "submit",
            Command::ToggleTask { .. } => "toggle",
            Command::OpenView(_) => "open",
        }
    }
}

/// Why a command changed nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Refusal {
    WrongView { command: &'static str, view: View },
    Teaching(Session),
    WeekendAfternoon,
    AlreadyRunning,
    NotRunning,
    SessionHasTasks(Session),
    NoSessionSelected,
    EmptyTitle,
    NoSuchTask { session: Session, index: usize },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::WrongView { command, view } => {
                write!(f, "'{command}' is not available in the {view} view")
            }
            Refusal::Teaching(session) => {
                write!(f, "{} is blocked by teaching today", session.label())
            }
            Refusal::WeekendAfternoon => f.write_str("the afternoon session is off on weekends"),
            Refusal::AlreadyRunning => f.write_str("the timer is already running"),
            Refusal::NotRunning => f.write_str("the timer is not running"),
            Refusal::SessionHasTasks(session) => write!(
                f,
                "{} already has tasks; select it and add from there",
                session.label()
            ),
            Refusal::NoSessionSelected => f.write_str("no session is selected"),
            Refusal::EmptyTitle => f.write_str("task title is empty"),
            Refusal::NoSuchTask { session, index } => {
                write!(f, "{} has no task #{}", session.label(), index + 1)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Applied,
    Ignored(Refusal),
}

impl Outcome {
    pub(crate) fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PlannerOptions {
    pub(crate) default_area: WorkArea,
    pub(crate) area_hours: AreaHours,
}

#[derive(Debug)]
pub(crate) struct Planner {
    pub(super) day: DayPlan,
    pub(super) view: View,
    pub(super) selected: Option<Session>,
    pub(super) timer: Timer,
    pub(super) ticker: Ticker,
    pub(super) tasks: TaskStore,
    pub(super) stats: WeeklyStats,
    pub(super) draft_area: WorkArea,
    options: PlannerOptions,
}

impl Planner {
    pub(crate) fn new(today: NaiveDate, options: PlannerOptions) -> Self {
        Planner {
            day: DayPlan::for_date(today),
            view: View::Home,
            selected: None,
            timer: Timer::default(),
            ticker: Ticker::default(),
            tasks: TaskStore::default(),
            stats: WeeklyStats::default(),
            draft_area: options.default_area,
            options,
        }
    }

    /// Recompute availability for a (possibly new) calendar day
    pub(crate) fn set_today(&mut self, today: NaiveDate) {
        if self.day.date != today {
            debug!(%today, "calendar day changed");
            self.day = DayPlan::for_date(today);
        }
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }

    pub(crate) fn selected(&self) -> Option<Session> {
        self.selected
    }

    pub(crate) fn timer(&self) -> &Timer {
        &self.timer
    }

    pub(crate) fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub(crate) fn stats(&self) -> &WeeklyStats {
        &self.stats
    }

    pub(crate) fn day(&self) -> &DayPlan {
        &self.day
    }

    pub(crate) fn draft_area(&self) -> WorkArea {
        self.draft_area
    }

    /// Feed every tick due at `now_ms` into the timer. Returns how many counted.
    pub(crate) fn advance(&mut self, now_ms: u64) -> u64 {
        self.ticker
            .due(now_ms)
            .into_iter()
            .fold(0u64, |counted, (handle, count)| {
                counted.saturating_add(self.timer.on_tick(handle, count))
            })
    }

    pub(crate) fn dispatch(&mut self, command: Command, now_ms: u64) -> Outcome {
        let name = command.name();
        let outcome = self.apply(command, now_ms);
        match &outcome {
            Outcome::Applied => debug!(
                command = name,
                view = %self.view,
                ticks = self.ticker.active_count(),
                "command applied"
            ),
            Outcome::Ignored(reason) => debug!(command = name, %reason, "command ignored"),
        }
        outcome
    }

    fn apply(&mut self, command: Command, now_ms: u64) -> Outcome {
        match command {
            Command::SelectSession(session) => self.select_session(session),
            Command::StartTimer => self.start_timer(now_ms),
            Command::PauseTimer => self.pause_timer(),
            Command::CompleteTimer => self.complete_timer(),
            Command::BackFromSession => self.back_from_session(),
            Command::OpenAddTask(session) => self.open_add_task(session),
            Command::ChooseArea(area) => self.choose_area(area),
            Command::SubmitTask { title, area } => self.submit_task(&title, area),
            Command::BackFromAddTask => self.back_from_add_task(),
            Command::ToggleTask { session, index } => self.toggle_task(session, index),
            Command::OpenView(target) => self.open_view(target),
        }
    }

    fn require_view(&self, command: &'static str, view: View) -> Result<(), Refusal> {
        if self.view == view {
            Ok(())
        } else {
            Err(Refusal::WrongView {
                command,
                view: self.view,
            })
        }
    }

    fn require_selectable(&self, session: Session) -> Result<(), Refusal> {
        match self.day.status(session) {
            SessionStatus::Open => Ok(()),
            SessionStatus::Teaching => Err(Refusal::Teaching(session)),
            SessionStatus::Weekend => Err(Refusal::WeekendAfternoon),
        }
    }

    fn select_session(&mut self, session: Session) -> Outcome {
        if let Err(refusal) = self
            .require_view("select", View::Home)
            .and_then(|()| self.require_selectable(session))
        {
            return Outcome::Ignored(refusal);
        }
        self.selected = Some(session);
        self.view = View::Session;
        Outcome::Applied
    }

    fn start_timer(&mut self, now_ms: u64) -> Outcome {
        if let Err(refusal) = self.require_view("start", View::Session) {
            return Outcome::Ignored(refusal);
        }
        if self.timer.is_running() {
            return Outcome::Ignored(Refusal::AlreadyRunning);
        }
        self.timer.start(&mut self.ticker, now_ms);
        Outcome::Applied
    }

    fn pause_timer(&mut self) -> Outcome {
        if let Err(refusal) = self.require_view("pause", View::Session) {
            return Outcome::Ignored(refusal);
        }
        if !self.timer.is_running() {
            return Outcome::Ignored(Refusal::NotRunning);
        }
        self.timer.pause(&mut self.ticker);
        Outcome::Applied
    }

    fn complete_timer(&mut self) -> Outcome {
        if let Err(refusal) = self.require_view("complete", View::Session) {
            return Outcome::Ignored(refusal);
        }
        if !self.timer.is_running() {
            return Outcome::Ignored(Refusal::NotRunning);
        }
        let elapsed = self.timer.complete(&mut self.ticker);
        let session_tasks = self
            .selected
            .map(|s| self.tasks.tasks(s))
            .unwrap_or(&[]);
        self.stats
            .record_completion(elapsed, session_tasks, self.options.area_hours);
        info!(
            elapsed_secs = elapsed,
            completed_sessions = self.stats.completed_sessions,
            "work session completed"
        );
        Outcome::Applied
    }

    fn back_from_session(&mut self) -> Outcome {
        if let Err(refusal) = self.require_view("back", View::Session) {
            return Outcome::Ignored(refusal);
        }
        // leaving abandons any uncommitted time
        self.timer.reset(&mut self.ticker);
        self.selected = None;
        self.view = View::Home;
        Outcome::Applied
    }

    fn open_add_task(&mut self, session: Option<Session>) -> Outcome {
        match (self.view, session) {
            (View::Home, Some(session)) => {
                if let Err(refusal) = self.require_selectable(session) {
                    return Outcome::Ignored(refusal);
                }
                if !self.tasks.tasks(session).is_empty() {
                    return Outcome::Ignored(Refusal::SessionHasTasks(session));
                }
                self.selected = Some(session);
            }
            (View::Home, None) => return Outcome::Ignored(Refusal::NoSessionSelected),
            // from the session view the selection already names the list
            (View::Session, _) => {}
            (view, _) => {
                return Outcome::Ignored(Refusal::WrongView {
                    command: "add",
                    view,
                });
            }
        }
        self.draft_area = self.options.default_area;
        self.view = View::AddTask;
        Outcome::Applied
    }

    fn choose_area(&mut self, area: WorkArea) -> Outcome {
        if let Err(refusal) = self.require_view("area", View::AddTask) {
            return Outcome::Ignored(refusal);
        }
        self.draft_area = area;
        Outcome::Applied
    }

    fn submit_task(&mut self, title: &str, area: WorkArea) -> Outcome {
        if let Err(refusal) = self.require_view("submit", View::AddTask) {
            return Outcome::Ignored(refusal);
        }
        if title.trim().is_empty() {
            return Outcome::Ignored(Refusal::EmptyTitle);
        }
        let Some(session) = self.selected else {
            return Outcome::Ignored(Refusal::NoSessionSelected);
        };
        if !self.tasks.add(session, title, area) {
            return Outcome::Ignored(Refusal::EmptyTitle);
        }
        self.draft_area = self.options.default_area;
        self.view = View::Session;
        Outcome::Applied
    }

    fn back_from_add_task(&mut self) -> Outcome {
        if let Err(refusal) = self.require_view("back", View::AddTask) {
            return Outcome::Ignored(refusal);
        }
        self.view = if self.selected.is_some() {
            View::Session
        } else {
            View::Home
        };
        Outcome::Applied
    }

    fn toggle_task(&mut self, session: Session, index: usize) -> Outcome {
        if self.tasks.toggle(session, index) {
            Outcome::Applied
        } else {
            Outcome::Ignored(Refusal::NoSuchTask { session, index })
        }
    }

    fn open_view(&mut self, target: ViewTarget) -> Outcome {
        if !self.view.is_top_level() {
            return Outcome::Ignored(Refusal::WrongView {
                command: "open",
                view: self.view,
            });
        }
        self.view = target.into();
        Outcome::Applied
    }
}
