/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// The session timer advances once per this many milliseconds
pub(crate) const TICK_INTERVAL_MS: u64 = 1_000;

/// Tasks shown per session card on the home view before "+N more"
pub(crate) const PREVIEW_TASKS: usize = 3;

/// Days listed by `availability` when --days is not given
pub(crate) const DEFAULT_AVAILABILITY_DAYS: u32 = 7;
