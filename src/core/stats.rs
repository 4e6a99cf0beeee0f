//! Weekly accumulator and the figures derived from it

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::catalog::WorkArea;
use crate::core::tasks::Task;

/// How completed-session hours are attributed to work areas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum AreaHours {
    /// Leave `by_area` untouched; only the totals grow
    #[default]
    None,
    /// Split the hours across the session's tasks by area, one share per task
    Tasks,
}

/// Totals for the current week. Only grows, and only on timer completion.
#[derive(Debug, Default, Clone, Serialize)]
pub(crate) struct WeeklyStats {
    pub(crate) completed_sessions: u32,
    pub(crate) total_hours: f64,
    pub(crate) by_area: BTreeMap<WorkArea, f64>,
}

impl WeeklyStats {
    /// Record one finished work session of `elapsed_secs` seconds.
    /// `tasks` is the task list of the session that was being worked on.
    pub(crate) fn record_completion(&mut self, elapsed_secs: u64, tasks: &[Task], policy: AreaHours) {
        let hours = elapsed_secs as f64 / 3600.0;
        self.completed_sessions += 1;
        self.total_hours += hours;

        if policy == AreaHours::Tasks && !tasks.is_empty() {
            let share = hours / tasks.len() as f64;
            for task in tasks {
                *self.by_area.entry(task.area).or_insert(0.0) += share;
            }
        }
    }

    /// Areas that have any attributed hours
    pub(crate) fn active_projects(&self) -> usize {
        self.by_area.len()
    }

    pub(crate) fn summary(&self) -> StatsSummary {
        let denominator = if self.total_hours == 0.0 {
            1.0
        } else {
            self.total_hours
        };
        let areas = WorkArea::ALL
            .into_iter()
            .map(|area| {
                let hours = self.by_area.get(&area).copied().unwrap_or(0.0);
                AreaHoursView {
                    area,
                    hours,
                    hours_rounded: hours.round() as u64,
                    // not clamped: by_area larger than the total overflows the bar
                    share_pct: hours / denominator * 100.0,
                }
            })
            .collect();

        StatsSummary {
            completed_sessions: self.completed_sessions,
            total_hours: self.total_hours,
            total_hours_rounded: self.total_hours.round() as u64,
            active_projects: self.active_projects(),
            areas,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AreaHoursView {
    pub(crate) area: WorkArea,
    pub(crate) hours: f64,
    pub(crate) hours_rounded: u64,
    pub(crate) share_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatsSummary {
    pub(crate) completed_sessions: u32,
    pub(crate) total_hours: f64,
    pub(crate) total_hours_rounded: u64,
    pub(crate) active_projects: usize,
    pub(crate) areas: Vec<AreaHoursView>,
}
