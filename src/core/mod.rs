//! Core module - planner state and the figures derived from it

mod availability;
mod catalog;
mod planner;
mod snapshot;
mod stats;
mod tasks;
mod timer;
mod view;

pub(crate) use availability::{DayPlan, SessionStatus};
pub(crate) use catalog::{Session, WorkArea};
pub(crate) use planner::{Command, Outcome, Planner, PlannerOptions};
pub(crate) use snapshot::{SessionCard, Snapshot};
pub(crate) use stats::AreaHours;
pub(crate) use view::{View, ViewTarget};
