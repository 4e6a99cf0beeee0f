//! Per-session task lists and their derived progress

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::catalog::{Session, WorkArea};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Task {
    pub(crate) title: String,
    pub(crate) area: WorkArea,
    pub(crate) completed: bool,
}

/// Completion rollup for one work area across all sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct AreaProgress {
    pub(crate) area: WorkArea,
    pub(crate) completed: usize,
    pub(crate) total: usize,
    pub(crate) percent: u32,
}

/// `round(100 * completed / total)`, 0 when there is nothing to count
pub(crate) fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

/// Tasks keyed by session; insertion order is display order
#[derive(Debug, Default, Clone)]
pub(crate) struct TaskStore {
    tasks: BTreeMap<Session, Vec<Task>>,
}

impl TaskStore {
    /// Append a task to `session`. Returns false (and stores nothing) when the
    /// title is blank after trimming.
    pub(crate) fn add(&mut self, session: Session, title: &str, area: WorkArea) -> bool {
        if title.trim().is_empty() {
            return false;
        }
        self.tasks.entry(session).or_default().push(Task {
            title: title.to_string(),
            area,
            completed: false,
        });
        true
    }

    /// Flip the completed flag of the task at `index`. Out-of-range indices
    /// are ignored and report false.
    pub(crate) fn toggle(&mut self, session: Session, index: usize) -> bool {
        match self.tasks.get_mut(&session).and_then(|list| list.get_mut(index)) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub(crate) fn tasks(&self, session: Session) -> &[Task] {
        self.tasks.get(&session).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn completed_count(&self, session: Session) -> usize {
        self.tasks(session).iter().filter(|t| t.completed).count()
    }

    pub(crate) fn progress(&self, session: Session) -> u32 {
        let list = self.tasks(session);
        percent(self.completed_count(session), list.len())
    }

    /// Rollup per work area in catalog order, skipping areas without tasks
    pub(crate) fn area_rollups(&self) -> Vec<AreaProgress> {
        WorkArea::ALL
            .into_iter()
            .filter_map(|area| {
                let (completed, total) = self
                    .tasks
                    .values()
                    .flatten()
                    .filter(|t| t.area == area)
                    .fold((0, 0), |(done, all), t| {
                        (done + usize::from(t.completed), all + 1)
                    });
                if total == 0 {
                    return None;
                }
                Some(AreaProgress {
                    area,
                    completed,
                    total,
                    percent: percent(completed, total),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(session: Session, flags: &[bool]) -> TaskStore {
        let mut store = TaskStore::default();
        for (i, done) in flags.iter().enumerate() {
            store.add(session, &format!("task {i}"), WorkArea::Lecture);
            if *done {
                store.toggle(session, i);
            }
        }
        store
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(1, 8), 13); // 12.5 rounds away from zero
        assert_eq!(percent(4, 4), 100);
    }

    #[test]
    fn progress_empty_session_is_zero() {
        assert_eq!(TaskStore::default().progress(Session::Morning), 0);
    }

    #[test]
    fn progress_two_of_three() {
        let store = store_with(Session::Midday, &[true, false, true]);
        assert_eq!(store.progress(Session::Midday), 67);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = TaskStore::default();
        assert!(store.add(Session::Morning, "slides", WorkArea::Lecture));
        assert!(store.add(Session::Morning, "draft intro", WorkArea::Paper));
        let titles: Vec<_> = store.tasks(Session::Morning).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["slides", "draft intro"]);
        assert!(store.tasks(Session::Morning).iter().all(|t| !t.completed));
    }

    #[test]
    fn add_whitespace_title_is_rejected() {
        let mut store = store_with(Session::Morning, &[false]);
        assert!(!store.add(Session::Morning, "  ", WorkArea::Book));
        assert!(!store.add(Session::Morning, "\t\n", WorkArea::Book));
        assert_eq!(store.tasks(Session::Morning).len(), 1);
    }

    #[test]
    fn toggle_flips_only_target() {
        let mut store = TaskStore::default();
        store.add(Session::Afternoon, "a", WorkArea::Research);
        store.add(Session::Afternoon, "b", WorkArea::Book);
        store.add(Session::Afternoon, "c", WorkArea::Paper);
        let before = store.tasks(Session::Afternoon).to_vec();

        assert!(store.toggle(Session::Afternoon, 1));

        let after = store.tasks(Session::Afternoon);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].title, "b");
        assert_eq!(after[1].area, WorkArea::Book);
        assert!(after[1].completed);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut store = TaskStore::default();
        store.add(Session::Morning, "review", WorkArea::Education);
        store.toggle(Session::Morning, 0);
        store.toggle(Session::Morning, 0);
        assert!(!store.tasks(Session::Morning)[0].completed);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut store = store_with(Session::Morning, &[false, true]);
        assert!(!store.toggle(Session::Morning, 2));
        assert!(!store.toggle(Session::Midday, 0));
        assert_eq!(store.completed_count(Session::Morning), 1);
    }

    #[test]
    fn area_rollups_skip_empty_areas_and_span_sessions() {
        let mut store = TaskStore::default();
        store.add(Session::Morning, "slides", WorkArea::Lecture);
        store.add(Session::Midday, "quiz", WorkArea::Lecture);
        store.add(Session::Midday, "chapter 2", WorkArea::Book);
        store.add(Session::Afternoon, "exercise", WorkArea::Lecture);
        store.toggle(Session::Midday, 0);

        let rollups = store.area_rollups();
        assert_eq!(rollups.len(), 2);
        assert_eq!(
            rollups[0],
            AreaProgress {
                area: WorkArea::Lecture,
                completed: 1,
                total: 3,
                percent: 33,
            }
        );
        assert_eq!(rollups[1].area, WorkArea::Book);
        assert_eq!(rollups[1].percent, 0);
    }
}
