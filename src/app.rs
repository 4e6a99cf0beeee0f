use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::{ClockMode, Cli, Commands, HELP, Input, parse_line};
use crate::clock::{Clock, ManualClock, SystemClock};
use crate::core::{DayPlan, Outcome, Planner, PlannerOptions};
use crate::error::AppError;
use crate::output::{
    RenderOptions, output_availability_json, output_catalog_json, output_snapshot_json,
    render_availability, render_catalog, render_view,
};
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) today: NaiveDate,
    pub(crate) render: RenderOptions,
}

/// Time source for one interactive run
enum RunClock {
    System(SystemClock),
    Manual(ManualClock),
}

impl RunClock {
    fn now_ms(&self) -> u64 {
        match self {
            RunClock::System(clock) => clock.now_ms(),
            RunClock::Manual(clock) => clock.now_ms(),
        }
    }

    fn wait(&self, secs: u64) -> Result<(), AppError> {
        match self {
            RunClock::Manual(clock) => {
                clock.advance(secs.saturating_mul(1_000));
                Ok(())
            }
            RunClock::System(_) => Err(AppError::WaitNeedsManualClock),
        }
    }
}

/// The interactive loop around one planner
pub(crate) struct Shell {
    planner: Planner,
    clock: RunClock,
    /// `None` when --date pins the calendar
    timezone: Option<Timezone>,
    json: bool,
    render: RenderOptions,
}

impl Shell {
    pub(crate) fn new(ctx: &CommandContext<'_>) -> Result<Self, AppError> {
        let options = PlannerOptions {
            default_area: ctx.cli.default_area()?,
            area_hours: ctx.cli.area_hours(),
        };
        let timezone = if ctx.cli.date_is_pinned() {
            None
        } else {
            Some(Timezone::parse(ctx.cli.timezone.as_deref())?)
        };
        let clock = match ctx.cli.clock {
            ClockMode::System => RunClock::System(SystemClock::new()),
            ClockMode::Manual => RunClock::Manual(ManualClock::default()),
        };
        info!(today = %ctx.today, clock = ?ctx.cli.clock, "planner started");

        Ok(Shell {
            planner: Planner::new(ctx.today, options),
            clock,
            timezone,
            json: ctx.cli.json,
            render: ctx.render,
        })
    }

    /// Read commands until `quit` or end of input, rendering after each change
    pub(crate) fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        self.emit(out, None)?;

        for line in input.lines() {
            let line = line?;
            self.refresh_day();
            self.planner.advance(self.clock.now_ms());

            match parse_line(&line) {
                Ok(Input::Quit) => break,
                Ok(parsed) => self.handle_input(parsed, out)?,
                Err(e) => eprintln!("{e}"),
            }
        }

        out.flush()?;
        Ok(())
    }

    fn refresh_day(&mut self) {
        if let Some(tz) = self.timezone {
            self.planner.set_today(tz.today());
        }
    }

    fn handle_input<W: Write>(&mut self, input: Input, out: &mut W) -> Result<(), AppError> {
        match input {
            Input::Blank | Input::Quit => Ok(()),
            Input::Help => {
                if self.json {
                    eprintln!("{HELP}");
                } else {
                    writeln!(out, "{HELP}")?;
                }
                Ok(())
            }
            Input::Show => self.emit(out, None),
            Input::Wait(secs) => {
                if let Err(e) = self.clock.wait(secs) {
                    eprintln!("{e}");
                    return Ok(());
                }
                let counted = self.planner.advance(self.clock.now_ms());
                debug!(secs, counted, "manual clock advanced");
                self.emit(out, None)
            }
            other => {
                let Some(command) = other.to_command(&self.planner) else {
                    return Ok(());
                };
                match self.planner.dispatch(command, self.clock.now_ms()) {
                    Outcome::Applied => self.emit(out, None),
                    Outcome::Ignored(reason) if self.json => {
                        self.emit(out, Some(reason.to_string()))
                    }
                    Outcome::Ignored(reason) => {
                        eprintln!("! {reason}");
                        Ok(())
                    }
                }
            }
        }
    }

    fn emit<W: Write>(&self, out: &mut W, notice: Option<String>) -> Result<(), AppError> {
        let mut snapshot = self.planner.snapshot();
        snapshot.notice = notice;
        if self.json {
            writeln!(out, "{}", output_snapshot_json(&snapshot))?;
        } else {
            write!(out, "{}", render_view(&snapshot, self.render))?;
        }
        Ok(())
    }
}

fn handle_run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut shell = Shell::new(ctx)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    shell.run(stdin.lock(), &mut out)
}

fn handle_availability(days: u32, ctx: &CommandContext<'_>) {
    let plans: Vec<DayPlan> = ctx
        .today
        .iter_days()
        .take(days as usize)
        .map(DayPlan::for_date)
        .collect();
    if ctx.cli.json {
        println!("{}", output_availability_json(&plans));
    } else {
        print!("{}", render_availability(&plans, ctx.render));
    }
}

fn handle_catalog(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_catalog_json());
    } else {
        print!("{}", render_catalog(ctx.render));
    }
}

pub(crate) fn handle_command(command: Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Commands::Run => handle_run(ctx),
        Commands::Availability { days } => {
            handle_availability(days, ctx);
            Ok(())
        }
        Commands::Catalog => {
            handle_catalog(ctx);
            Ok(())
        }
    }
}
