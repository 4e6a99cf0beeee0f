//! Fixed catalog of work areas and daily sessions
//!
//! Both sets are compile-time constants; nothing creates or removes them at runtime.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Project category attached to every task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WorkArea {
    #[default]
    Lecture,
    Research,
    Paper,
    Book,
    Education,
}

impl WorkArea {
    /// Catalog order, used for every per-area listing
    pub(crate) const ALL: [WorkArea; 5] = [
        WorkArea::Lecture,
        WorkArea::Research,
        WorkArea::Paper,
        WorkArea::Book,
        WorkArea::Education,
    ];

    pub(crate) fn id(self) -> &'static str {
        match self {
            WorkArea::Lecture => "lecture",
            WorkArea::Research => "research",
            WorkArea::Paper => "paper",
            WorkArea::Book => "book",
            WorkArea::Education => "education",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            WorkArea::Lecture => "Lecture Prep",
            WorkArea::Research => "Research & Development",
            WorkArea::Paper => "Academic Papers",
            WorkArea::Book => "Book Writing",
            WorkArea::Education => "Education Programs",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            WorkArea::Lecture => "📚",
            WorkArea::Research => "🔬",
            WorkArea::Paper => "📝",
            WorkArea::Book => "📖",
            WorkArea::Education => "🎓",
        }
    }

    /// Color tag (maps onto a terminal color when rendering)
    pub(crate) fn color(self) -> &'static str {
        match self {
            WorkArea::Lecture => "blue",
            WorkArea::Research => "purple",
            WorkArea::Paper => "green",
            WorkArea::Book => "amber",
            WorkArea::Education => "pink",
        }
    }
}

impl fmt::Display for WorkArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkArea {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        WorkArea::ALL
            .into_iter()
            .find(|area| area.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownArea {
                input: trimmed.to_string(),
            })
    }
}

/// One of the three fixed daily time blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Session {
    Morning,
    Midday,
    Afternoon,
}

impl Session {
    pub(crate) const ALL: [Session; 3] = [Session::Morning, Session::Midday, Session::Afternoon];

    pub(crate) fn id(self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Midday => "midday",
            Session::Afternoon => "afternoon",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Session::Morning => "Morning Session",
            Session::Midday => "Late Morning Session",
            Session::Afternoon => "Afternoon Session",
        }
    }

    pub(crate) fn time_range(self) -> &'static str {
        match self {
            Session::Morning => "06:00-08:30",
            Session::Midday => "09:30-13:00",
            Session::Afternoon => "14:00-18:00",
        }
    }

    /// Target working time in minutes
    pub(crate) fn target_minutes(self) -> u32 {
        match self {
            Session::Morning => 150,
            Session::Midday => 210,
            Session::Afternoon => 240,
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Session::Morning => "☀️",
            Session::Midday => "🌤️",
            Session::Afternoon => "🌆",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Session {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Session::ALL
            .into_iter()
            .find(|session| session.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownSession {
                input: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_targets_match_time_ranges() {
        assert_eq!(Session::Morning.target_minutes(), 150);
        assert_eq!(Session::Midday.target_minutes(), 210);
        assert_eq!(Session::Afternoon.target_minutes(), 240);
        assert_eq!(Session::Midday.time_range(), "09:30-13:00");
    }

    #[test]
    fn session_parse_is_case_insensitive() {
        assert_eq!("Morning".parse::<Session>().unwrap(), Session::Morning);
        assert_eq!(" AFTERNOON ".parse::<Session>().unwrap(), Session::Afternoon);
    }

    #[test]
    fn session_parse_unknown_is_error() {
        let err = "evening".parse::<Session>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown session: evening (expected morning, midday or afternoon)");
    }

    #[test]
    fn area_parse_round_trips_ids() {
        for area in WorkArea::ALL {
            assert_eq!(area.id().parse::<WorkArea>().unwrap(), area);
        }
    }

    #[test]
    fn area_parse_unknown_is_error() {
        assert!("gardening".parse::<WorkArea>().is_err());
    }

    #[test]
    fn area_serializes_as_lowercase_id() {
        assert_eq!(serde_json::to_string(&WorkArea::Education).unwrap(), "\"education\"");
        assert_eq!(serde_json::to_string(&Session::Midday).unwrap(), "\"midday\"");
    }

    #[test]
    fn catalog_order_is_stable() {
        let ids: Vec<_> = WorkArea::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids, ["lecture", "research", "paper", "book", "education"]);
        assert_eq!(WorkArea::Book.color(), "amber");
    }
}
