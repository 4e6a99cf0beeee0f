use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unknown session: {input} (expected morning, midday or afternoon)")]
    UnknownSession { input: String },

    #[error("Unknown work area: {input} (expected lecture, research, paper, book or education)")]
    UnknownArea { input: String },

    #[error("Unknown view: {input} (expected home, projects or stats)")]
    UnknownView { input: String },

    #[error("Unknown command \"{input}\" (type 'help' for a list)")]
    UnknownCommand { input: String },

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number \"{input}\" for '{command}'")]
    InvalidNumber {
        command: &'static str,
        input: String,
    },

    #[error("'wait' only works with --clock manual")]
    WaitNeedsManualClock,

    #[error("Failed to read config {path}: {message}")]
    Config { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
