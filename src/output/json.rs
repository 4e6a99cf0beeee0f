use crate::core::Snapshot;

/// One snapshot per line so a script can read the run as JSON lines
pub(crate) fn output_snapshot_json(snapshot: &Snapshot) -> String {
    serde_json::to_string(snapshot).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
