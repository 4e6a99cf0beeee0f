mod app;
mod cli;
mod clock;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use clap::Parser;
use tracing::{debug, warn};

use app::{CommandContext, handle_command};
use cli::{Cli, parse_command};
use config::{Config, ConfigLoad};
use error::AppError;
use output::RenderOptions;
use utils::init_logging;

fn load_config(cli: &Cli) -> Result<ConfigLoad, AppError> {
    match &cli.config {
        Some(path) => Ok(ConfigLoad {
            config: Config::load_from(path)?,
            path: Some(path.clone()),
            problems: Vec::new(),
        }),
        None => Ok(Config::discover()),
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Load config file and merge with CLI args
    let loaded = load_config(&cli)?;
    let cli = cli.with_config(&loaded.config);

    init_logging(cli.debug);
    match &loaded.path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
    for problem in &loaded.problems {
        warn!("{problem}");
    }

    let ctx = CommandContext {
        cli: &cli,
        today: cli.today()?,
        render: RenderOptions {
            use_color: cli.use_color(),
        },
    };
    handle_command(parse_command(&cli.command), &ctx)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
