//! Interactive command grammar
//!
//! One command per line. Keywords are case-insensitive; task numbers are
//! 1-based as shown on screen.

use crate::core::{Command, Planner, Session, View, ViewTarget, WorkArea};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Blank,
    Select(Session),
    Start,
    Pause,
    Complete,
    Back,
    Add(Option<Session>),
    Area(WorkArea),
    Submit(String),
    Toggle { session: Session, number: usize },
    Open(ViewTarget),
    Wait(u64),
    Show,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
Commands:
  select <session>        open a session (morning, midday, afternoon)
  start | pause           run or pause the session timer
  complete                finish the running work session
  back                    leave the current screen
  add [session]           open the add-task form
  area <area>             pick the work area on the add-task form
  submit <title>          add the task to the selected session
  toggle <session> <n>    flip task n of a session
  open <home|projects|stats>  (or just: home, projects, stats)
  wait <seconds>          advance the manual clock
  show                    render the current screen again
  help                    this list
  quit                    leave";

fn missing(command: &'static str, expected: &'static str) -> AppError {
    AppError::MissingArgument { command, expected }
}

pub(crate) fn parse_line(line: &str) -> Result<Input, AppError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Input::Blank);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (trimmed, ""),
    };
    let mut args = rest.split_whitespace();

    match keyword.to_ascii_lowercase().as_str() {
        "select" => {
            let session = args.next().ok_or_else(|| missing("select", "a session"))?;
            Ok(Input::Select(session.parse()?))
        }
        "start" => Ok(Input::Start),
        "pause" => Ok(Input::Pause),
        "complete" | "done" => Ok(Input::Complete),
        "back" => Ok(Input::Back),
        "add" => match args.next() {
            Some(session) => Ok(Input::Add(Some(session.parse()?))),
            None => Ok(Input::Add(None)),
        },
        "area" => {
            let area = args.next().ok_or_else(|| missing("area", "a work area"))?;
            Ok(Input::Area(area.parse()?))
        }
        // the title keeps its inner spacing; blank titles are refused by the planner
        "submit" => Ok(Input::Submit(rest.to_string())),
        "toggle" => {
            let session = args
                .next()
                .ok_or_else(|| missing("toggle", "a session and a task number"))?;
            let raw = args
                .next()
                .ok_or_else(|| missing("toggle", "a session and a task number"))?;
            let number = raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::InvalidNumber {
                    command: "toggle",
                    input: raw.to_string(),
                })?;
            Ok(Input::Toggle {
                session: session.parse()?,
                number,
            })
        }
        "open" => {
            let target = args.next().ok_or_else(|| missing("open", "a view"))?;
            Ok(Input::Open(target.parse()?))
        }
        "home" => Ok(Input::Open(ViewTarget::Home)),
        "projects" => Ok(Input::Open(ViewTarget::Projects)),
        "stats" => Ok(Input::Open(ViewTarget::Stats)),
        "wait" => {
            let raw = args.next().ok_or_else(|| missing("wait", "a number of seconds"))?;
            let secs = raw.parse::<u64>().map_err(|_| AppError::InvalidNumber {
                command: "wait",
                input: raw.to_string(),
            })?;
            Ok(Input::Wait(secs))
        }
        "show" => Ok(Input::Show),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => Err(AppError::UnknownCommand {
            input: keyword.to_string(),
        }),
    }
}

impl Input {
    /// Planner command for this input, resolved against the current state.
    /// Shell-only inputs (wait, show, help, quit) have none.
    pub(crate) fn to_command(&self, planner: &Planner) -> Option<Command> {
        let command = match self {
            Input::Select(session) => Command::SelectSession(*session),
            Input::Start => Command::StartTimer,
            Input::Pause => Command::PauseTimer,
            Input::Complete => Command::CompleteTimer,
            Input::Back => match planner.view() {
                View::AddTask => Command::BackFromAddTask,
                View::Projects | View::Stats => Command::OpenView(ViewTarget::Home),
                View::Session | View::Home => Command::BackFromSession,
            },
            Input::Add(session) => Command::OpenAddTask(*session),
            Input::Area(area) => Command::ChooseArea(*area),
            Input::Submit(title) => Command::SubmitTask {
                title: title.clone(),
                area: planner.draft_area(),
            },
            Input::Toggle { session, number } => Command::ToggleTask {
                session: *session,
                index: number - 1,
            },
            Input::Open(target) => Command::OpenView(*target),
            Input::Blank | Input::Wait(_) | Input::Show | Input::Help | Input::Quit => {
                return None;
            }
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlannerOptions;
    use chrono::NaiveDate;

    fn planner() -> Planner {
        Planner::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            PlannerOptions::default(),
        )
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), Input::Blank);
        assert_eq!(parse_line("   ").unwrap(), Input::Blank);
        assert_eq!(parse_line("# warm-up").unwrap(), Input::Blank);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_line("SELECT Morning").unwrap(), Input::Select(Session::Morning));
        assert_eq!(parse_line("Start").unwrap(), Input::Start);
        assert_eq!(parse_line("STATS").unwrap(), Input::Open(ViewTarget::Stats));
    }

    #[test]
    fn submit_keeps_inner_spacing() {
        assert_eq!(
            parse_line("submit  Draft  chapter 3 slides ").unwrap(),
            Input::Submit("Draft  chapter 3 slides".to_string())
        );
        assert_eq!(parse_line("submit").unwrap(), Input::Submit(String::new()));
    }

    #[test]
    fn toggle_needs_positive_number() {
        assert_eq!(
            parse_line("toggle midday 2").unwrap(),
            Input::Toggle {
                session: Session::Midday,
                number: 2
            }
        );
        assert!(matches!(
            parse_line("toggle midday 0"),
            Err(AppError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_line("toggle midday"),
            Err(AppError::MissingArgument { .. })
        ));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!(parse_line("select evening"), Err(AppError::UnknownSession { .. })));
        assert!(matches!(parse_line("area cooking"), Err(AppError::UnknownArea { .. })));
        assert!(matches!(parse_line("open session"), Err(AppError::UnknownView { .. })));
        assert!(matches!(parse_line("dance"), Err(AppError::UnknownCommand { .. })));
    }

    #[test]
    fn wait_parses_seconds() {
        assert_eq!(parse_line("wait 90").unwrap(), Input::Wait(90));
        assert!(parse_line("wait soon").is_err());
    }

    #[test]
    fn back_depends_on_view() {
        let mut p = planner();
        assert_eq!(Input::Back.to_command(&p), Some(Command::BackFromSession));
        p.dispatch(Command::OpenView(ViewTarget::Stats), 0);
        assert_eq!(
            Input::Back.to_command(&p),
            Some(Command::OpenView(ViewTarget::Home))
        );
        p.dispatch(Command::OpenView(ViewTarget::Home), 0);
        p.dispatch(Command::OpenAddTask(Some(Session::Morning)), 0);
        assert_eq!(Input::Back.to_command(&p), Some(Command::BackFromAddTask));
    }

    #[test]
    fn submit_uses_draft_area_and_toggle_is_zero_based() {
        let mut p = planner();
        p.dispatch(Command::OpenAddTask(Some(Session::Morning)), 0);
        p.dispatch(Command::ChooseArea(WorkArea::Research), 0);
        assert_eq!(
            Input::Submit("lab notes".to_string()).to_command(&p),
            Some(Command::SubmitTask {
                title: "lab notes".to_string(),
                area: WorkArea::Research
            })
        );
        assert_eq!(
            Input::Toggle {
                session: Session::Morning,
                number: 1
            }
            .to_command(&p),
            Some(Command::ToggleTask {
                session: Session::Morning,
                index: 0
            })
        );
        assert_eq!(Input::Show.to_command(&p), None);
    }
}
