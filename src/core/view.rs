use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Screen currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum View {
    #[default]
    Home,
    Session,
    AddTask,
    Projects,
    Stats,
}

impl View {
    pub(crate) fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Session => "session",
            View::AddTask => "addTask",
            View::Projects => "projects",
            View::Stats => "stats",
        }
    }

    /// Views reachable from the navigation bar
    pub(crate) fn is_top_level(self) -> bool {
        matches!(self, View::Home | View::Projects | View::Stats)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Targets of the direct `open` navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewTarget {
    Home,
    Projects,
    Stats,
}

impl From<ViewTarget> for View {
    fn from(target: ViewTarget) -> Self {
        match target {
            ViewTarget::Home => View::Home,
            ViewTarget::Projects => View::Projects,
            ViewTarget::Stats => View::Stats,
        }
    }
}

impl FromStr for ViewTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(ViewTarget::Home),
            "projects" | "project" => Ok(ViewTarget::Projects),
            "stats" => Ok(ViewTarget::Stats),
            other => Err(AppError::UnknownView {
                input: other.to_string(),
            }),
        }
    }
}
