//! Which sessions are open on a given day
//!
//! Teaching commitments block some sessions from March to June; the rest of
//! the year every session is open. Weekends additionally hide the afternoon
//! from the selectable set, which is a presentation filter applied in
//! [`DayPlan`] and not part of [`availability_for`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::core::catalog::Session;

/// Open/blocked flag for each of the three sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Availability {
    pub(crate) morning: bool,
    pub(crate) midday: bool,
    pub(crate) afternoon: bool,
}

impl Availability {
    const ALL_OPEN: Availability = Availability {
        morning: true,
        midday: true,
        afternoon: true,
    };

    pub(crate) fn is_open(&self, session: Session) -> bool {
        match session {
            Session::Morning => self.morning,
            Session::Midday => self.midday,
            Session::Afternoon => self.afternoon,
        }
    }
}

/// Session availability for `date`
pub(crate) fn availability_for(date: NaiveDate) -> Availability {
    let month = date.month();
    // 0 = Sunday .. 6 = Saturday
    let day = date.weekday().num_days_from_sunday();

    if month <= 2 {
        return Availability::ALL_OPEN;
    }

    if (3..=6).contains(&month) {
        if day == 4 {
            return Availability {
                morning: true,
                midday: true,
                afternoon: false,
            };
        }
        if day == 5 {
            return Availability {
                morning: true,
                midday: false,
                afternoon: false,
            };
        }
    }

    Availability::ALL_OPEN
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Why a session cannot be picked today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SessionStatus {
    Open,
    /// Blocked by a recurring teaching commitment
    Teaching,
    /// Afternoon on a weekend
    Weekend,
}

/// Availability computed for one calendar day
#[derive(Debug, Clone, Copy)]
pub(crate) struct DayPlan {
    pub(crate) date: NaiveDate,
    pub(crate) availability: Availability,
    pub(crate) weekend: bool,
}

impl DayPlan {
    pub(crate) fn for_date(date: NaiveDate) -> Self {
        DayPlan {
            date,
            availability: availability_for(date),
            weekend: is_weekend(date),
        }
    }

    pub(crate) fn status(&self, session: Session) -> SessionStatus {
        if !self.availability.is_open(session) {
            SessionStatus::Teaching
        } else if self.weekend && session == Session::Afternoon {
            SessionStatus::Weekend
        } else {
            SessionStatus::Open
        }
    }

    pub(crate) fn is_selectable(&self, session: Session) -> bool {
        self.status(session) == SessionStatus::Open
    }

    pub(crate) fn selectable_sessions(&self) -> Vec<Session> {
        Session::ALL
            .into_iter()
            .filter(|s| self.is_selectable(*s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn all_open() -> Availability {
        Availability {
            morning: true,
            midday: true,
            afternoon: true,
        }
    }

    #[test]
    fn january_and_february_are_fully_open() {
        // 2026-01-01 is a Thursday, 2026-02-06 a Friday
        assert_eq!(availability_for(d(2026, 1, 1)), all_open());
        assert_eq!(availability_for(d(2026, 2, 6)), all_open());
    }

    #[test]
    fn thursday_in_term_blocks_afternoon() {
        // 2026-03-05 is a Thursday
        let a = availability_for(d(2026, 3, 5));
        assert_eq!(
            a,
            Availability {
                morning: true,
                midday: true,
                afternoon: false
            }
        );
    }

    #[test]
    fn friday_in_term_blocks_midday_and_afternoon() {
        // 2026-06-26 is a Friday
        let a = availability_for(d(2026, 6, 26));
        assert_eq!(
            a,
            Availability {
                morning: true,
                midday: false,
                afternoon: false
            }
        );
    }

    #[test]
    fn other_term_weekdays_are_open() {
        // 2026-04-06 Monday .. 2026-04-08 Wednesday, 2026-04-11 Saturday
        for day in [6, 7, 8, 11, 12] {
            assert_eq!(availability_for(d(2026, 4, day)), all_open(), "April {day}");
        }
    }

    #[test]
    fn july_through_december_are_fully_open() {
        // 2026-07-02 Thursday, 2026-12-04 Friday
        assert_eq!(availability_for(d(2026, 7, 2)), all_open());
        assert_eq!(availability_for(d(2026, 12, 4)), all_open());
    }

    #[test]
    fn whole_year_matches_rule_table() {
        let mut date = d(2025, 1, 1);
        while date.year() == 2025 {
            let a = availability_for(date);
            let in_term = (3..=6).contains(&date.month());
            match (in_term, date.weekday()) {
                (true, Weekday::Thu) => assert!(a.morning && a.midday && !a.afternoon),
                (true, Weekday::Fri) => assert!(a.morning && !a.midday && !a.afternoon),
                _ => assert_eq!(a, all_open(), "{date}"),
            }
            date += Duration::days(1);
        }
    }

    #[test]
    fn weekend_only_saturday_and_sunday() {
        // 2026-10-17 Saturday, 2026-10-18 Sunday, 2026-10-19 Monday
        assert!(is_weekend(d(2026, 10, 17)));
        assert!(is_weekend(d(2026, 10, 18)));
        assert!(!is_weekend(d(2026, 10, 19)));
        assert!(!is_weekend(d(2026, 10, 16)));
    }

    #[test]
    fn weekend_hides_afternoon_from_selectable() {
        let plan = DayPlan::for_date(d(2026, 10, 18));
        assert!(plan.availability.afternoon);
        assert_eq!(plan.status(Session::Afternoon), SessionStatus::Weekend);
        assert_eq!(
            plan.selectable_sessions(),
            vec![Session::Morning, Session::Midday]
        );
    }

    #[test]
    fn teaching_status_wins_over_weekend() {
        let plan = DayPlan::for_date(d(2026, 3, 5));
        assert_eq!(plan.status(Session::Afternoon), SessionStatus::Teaching);
        assert_eq!(plan.selectable_sessions(), vec![Session::Morning, Session::Midday]);
    }

    #[test]
    fn weekday_outside_term_all_selectable() {
        let plan = DayPlan::for_date(d(2026, 10, 19));
        assert_eq!(plan.selectable_sessions(), Session::ALL.to_vec());
    }
}
