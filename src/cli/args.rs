//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigAreaHours, ConfigClock, ConfigColorMode};
use crate::core::{AreaHours, WorkArea};
use crate::error::AppError;
use crate::utils::{Timezone, parse_date};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ClockMode {
    /// Wall clock; the timer follows real time (default)
    #[default]
    System,
    /// Time only moves with the `wait` command
    Manual,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum AreaHoursMode {
    /// Completed hours only count toward the weekly total (default)
    #[default]
    None,
    /// Also split completed hours across the session's task areas
    Tasks,
}

#[derive(Parser)]
#[command(name = "worksched")]
#[command(about = "Plan the day's work sessions, time them, and track tasks", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Plan for this date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Timezone that decides which day is today (e.g., "Asia/Seoul", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Clock driving the session timer
    #[arg(long, global = true, value_enum, default_value = "system")]
    pub(crate) clock: ClockMode,

    /// Work area preselected on the add-task form
    #[arg(short, long, global = true, value_name = "AREA")]
    pub(crate) area: Option<String>,

    /// How completed hours are attributed to work areas
    #[arg(long, global = true, value_enum, default_value = "none")]
    pub(crate) area_hours: AreaHoursMode,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, apply config only while the CLI is at its default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if let Some(clock) = config.clock
            && self.clock == ClockMode::System
        {
            self.clock = match clock {
                ConfigClock::System => ClockMode::System,
                ConfigClock::Manual => ClockMode::Manual,
            };
        }

        if let Some(area_hours) = config.area_hours
            && self.area_hours == AreaHoursMode::None
        {
            self.area_hours = match area_hours {
                ConfigAreaHours::None => AreaHoursMode::None,
                ConfigAreaHours::Tasks => AreaHoursMode::Tasks,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.area.is_none() {
            self.area = config.default_area.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn area_hours(&self) -> AreaHours {
        match self.area_hours {
            AreaHoursMode::None => AreaHours::None,
            AreaHoursMode::Tasks => AreaHours::Tasks,
        }
    }

    pub(crate) fn default_area(&self) -> Result<WorkArea, AppError> {
        match &self.area {
            Some(raw) => raw.parse(),
            None => Ok(WorkArea::default()),
        }
    }

    /// --date when given, otherwise today in the configured timezone
    pub(crate) fn today(&self) -> Result<NaiveDate, AppError> {
        match &self.date {
            Some(raw) => parse_date(raw),
            None => Ok(Timezone::parse(self.timezone.as_deref())?.today()),
        }
    }

    /// A fixed --date pins the calendar for the whole run
    pub(crate) fn date_is_pinned(&self) -> bool {
        self.date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["worksched"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.clock, ClockMode::System);
        assert_eq!(cli.area_hours(), AreaHours::None);
        assert_eq!(cli.default_area().unwrap(), WorkArea::Lecture);
    }

    #[test]
    fn date_flag_overrides_today() {
        let cli = parse(&["--date", "20260305"]);
        assert_eq!(cli.today().unwrap(), NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert!(cli.date_is_pinned());
    }

    #[test]
    fn invalid_area_is_an_error() {
        let cli = parse(&["--area", "cooking"]);
        assert!(cli.default_area().is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            json: true,
            color: Some(ConfigColorMode::Never),
            clock: Some(ConfigClock::Manual),
            area_hours: Some(ConfigAreaHours::Tasks),
            default_area: Some("book".to_string()),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.json);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(!cli.use_color());
        assert_eq!(cli.clock, ClockMode::Manual);
        assert_eq!(cli.area_hours(), AreaHours::Tasks);
        assert_eq!(cli.default_area().unwrap(), WorkArea::Book);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            default_area: Some("book".to_string()),
            timezone: Some("UTC".to_string()),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["--area", "paper", "--timezone", "Asia/Seoul", "--color", "always"])
            .with_config(&config);
        assert_eq!(cli.default_area().unwrap(), WorkArea::Paper);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Seoul"));
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn no_color_beats_always() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
