pub(crate) mod args;
pub(crate) mod commands;
pub(crate) mod input;

pub(crate) use args::{ClockMode, Cli};
pub(crate) use commands::{Commands, parse_command};
pub(crate) use input::{HELP, Input, parse_line};
