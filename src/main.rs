//! Trading orchestrator CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use trading_config::{load_config, LoggingConfig};
use trading_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes from the config file when it loads; flags win
    let logging = load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    let level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or(logging.level);
    let json = cli.json_logs || logging.format.eq_ignore_ascii_case("json");
    let _guard = setup_logging(&level, json, logging.file.as_deref().map(Path::new))?;

    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
        Commands::Signals(args) => cli::commands::signals::run(args).await,
        Commands::Size(args) => cli::commands::size::run(args).await,
    }
}
