//! CLI subcommand definitions

use clap::Subcommand;

use crate::consts::DEFAULT_AVAILABILITY_DAYS;

/// Main CLI commands
#[derive(Debug, Clone, Copy, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Interactive planner reading commands from stdin (default)
    Run,
    /// Show which sessions are open over the coming days
    Availability {
        /// Number of days to list, starting at --date or today
        #[arg(long, default_value_t = DEFAULT_AVAILABILITY_DAYS)]
        days: u32,
    },
    /// List the sessions and work areas
    Catalog,
}

/// Parse CLI command, defaulting to the interactive planner
pub(crate) fn parse_command(cmd: &Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_means_run() {
        assert_eq!(parse_command(&None), Commands::Run);
        assert_eq!(parse_command(&Some(Commands::Catalog)), Commands::Catalog);
    }
}
