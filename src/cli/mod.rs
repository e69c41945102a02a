//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trading-orchestrator")]
#[command(author, version, about = "Session-gated multi-instrument trading orchestrator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the orchestrator against local CSV data and the paper broker
    Run(RunArgs),
    /// Validate configuration
    ValidateConfig,
    /// List available signal sources
    Signals(SignalsArgs),
    /// Compute a position size
    Size(SizeArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Directory with one CSV file per instrument
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Signal source name
    #[arg(short, long)]
    pub signal: Option<String>,

    /// Place orders instead of only logging signals
    #[arg(long)]
    pub live: bool,
}

#[derive(clap::Args)]
pub struct SignalsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct SizeArgs {
    /// Account balance
    #[arg(short, long)]
    pub balance: Decimal,

    /// Fraction of the balance to risk
    #[arg(short, long, default_value = "0.01")]
    pub risk: Decimal,

    /// Stop distance in pips
    #[arg(short, long)]
    pub stop: Decimal,

    /// Value of one pip per unit of size
    #[arg(long, default_value = "10")]
    pub pip_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "trading-orchestrator",
            "--log-level",
            "debug",
            "run",
            "--data-dir",
            "bars",
            "--live",
        ])
        .unwrap();

        assert!(matches!(cli.log_level, Some(LogLevel::Debug)));
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.data_dir, Some(PathBuf::from("bars")));
                assert!(args.signal.is_none());
                assert!(args.live);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_size() {
        let cli = Cli::try_parse_from([
            "trading-orchestrator",
            "size",
            "--balance",
            "10000",
            "--stop",
            "20",
        ])
        .unwrap();

        match cli.command {
            Commands::Size(args) => {
                assert_eq!(args.balance, Decimal::from(10000));
                assert_eq!(args.risk, Decimal::new(1, 2));
                assert_eq!(args.pip_value, Decimal::from(10));
            }
            _ => panic!("expected size"),
        }
    }
}
