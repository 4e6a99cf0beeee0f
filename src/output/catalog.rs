use std::fmt::Write as _;

use comfy_table::Cell;

use crate::core::{Session, WorkArea};
use crate::output::format::{
    RenderOptions, area_color, create_styled_table, header_cell, right_cell, styled_cell,
};

pub(crate) fn render_catalog(options: RenderOptions) -> String {
    let use_color = options.use_color;

    let mut sessions = create_styled_table();
    sessions.set_header(vec![
        header_cell("Id", use_color),
        header_cell("Session", use_color),
        header_cell("Time", use_color),
        header_cell("Target", use_color),
    ]);
    for session in Session::ALL {
        sessions.add_row(vec![
            Cell::new(session.id()),
            Cell::new(format!("{} {}", session.icon(), session.label())),
            Cell::new(session.time_range()),
            right_cell(&format!("{} min", session.target_minutes()), None, false),
        ]);
    }

    let mut areas = create_styled_table();
    areas.set_header(vec![
        header_cell("Id", use_color),
        header_cell("Work area", use_color),
    ]);
    for area in WorkArea::ALL {
        areas.add_row(vec![
            Cell::new(area.id()),
            styled_cell(
                &format!("{} {}", area.icon(), area.label()),
                options.color(area_color(area)),
                false,
            ),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n  Sessions\n\n{sessions}\n\n  Work areas\n\n{areas}");
    out
}

pub(crate) fn output_catalog_json() -> String {
    let sessions: Vec<serde_json::Value> = Session::ALL
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id(),
                "label": s.label(),
                "time": s.time_range(),
                "target_minutes": s.target_minutes(),
                "icon": s.icon(),
            })
        })
        .collect();
    let areas: Vec<serde_json::Value> = WorkArea::ALL
        .iter()
        .map(|a| {
            serde_json::json!({
                "id": a.id(),
                "label": a.label(),
                "icon": a.icon(),
                "color": a.color(),
            })
        })
        .collect();

    let output = serde_json::json!({ "sessions": sessions, "areas": areas });
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_table_lists_everything() {
        let out = render_catalog(RenderOptions::default());
        assert!(out.contains("06:00-08:30"));
        assert!(out.contains("240 min"));
        assert!(out.contains("education"));
    }

    #[test]
    fn catalog_json_has_all_entries() {
        let value: serde_json::Value = serde_json::from_str(&output_catalog_json()).unwrap();
        assert_eq!(value["sessions"].as_array().unwrap().len(), 3);
        assert_eq!(value["areas"].as_array().unwrap().len(), 5);
        assert_eq!(value["areas"][3]["color"], "amber");
        assert_eq!(value["sessions"][1]["target_minutes"], 210);
    }
}
