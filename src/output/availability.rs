use std::fmt::Write as _;

use chrono::Datelike;
use comfy_table::{Cell, Color};

use crate::consts::DATE_FORMAT;
use crate::core::{DayPlan, Session, SessionStatus};
use crate::output::format::{
    RenderOptions, create_styled_table, header_cell, status_label, styled_cell,
};

pub(crate) fn render_availability(days: &[DayPlan], options: RenderOptions) -> String {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    let mut header = vec![header_cell("Date", use_color), header_cell("Day", use_color)];
    header.extend(Session::ALL.map(|s| header_cell(s.label(), use_color)));
    table.set_header(header);

    for day in days {
        let mut row = vec![
            Cell::new(day.date.format(DATE_FORMAT).to_string()),
            Cell::new(day.date.weekday().to_string()),
        ];
        for session in Session::ALL {
            let status = day.status(session);
            let color = match status {
                SessionStatus::Open => options.color(Color::Green),
                SessionStatus::Teaching => options.color(Color::Red),
                SessionStatus::Weekend => options.color(Color::DarkGrey),
            };
            row.push(styled_cell(status_label(status), color, false));
        }
        table.add_row(row);
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n  Session availability\n");
    let _ = writeln!(out, "{table}");
    out
}

pub(crate) fn output_availability_json(days: &[DayPlan]) -> String {
    let output: Vec<serde_json::Value> = days
        .iter()
        .map(|day| {
            serde_json::json!({
                "date": day.date.format(DATE_FORMAT).to_string(),
                "weekday": day.date.weekday().to_string(),
                "weekend": day.weekend,
                "availability": day.availability,
                "selectable": day.selectable_sessions(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}
