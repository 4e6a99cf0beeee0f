mod add_task;
mod availability;
mod catalog;
mod format;
mod home;
mod json;
mod project;
mod session;
mod stats;

pub(crate) use availability::{output_availability_json, render_availability};
pub(crate) use catalog::{output_catalog_json, render_catalog};
pub(crate) use format::RenderOptions;
pub(crate) use json::output_snapshot_json;

use crate::core::{Snapshot, View};

/// Text rendering of whichever screen the snapshot is on
pub(crate) fn render_view(snapshot: &Snapshot, options: RenderOptions) -> String {
    match snapshot.view {
        View::Home => home::render_home(snapshot, options),
        View::Session if snapshot.selected_session.is_some() => {
            session::render_session(snapshot, options)
        }
        View::Session => home::render_home(snapshot, options),
        View::AddTask => add_task::render_add_task(snapshot, options),
        View::Projects => project::render_projects(snapshot, options),
        View::Stats => stats::render_stats(snapshot, options),
    }
}
