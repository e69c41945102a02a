//! Run command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use trading_broker::PaperBroker;
use trading_config::load_config;
use trading_data::CsvMarketData;
use trading_engine::{ExecutionMode, Orchestrator, Shutdown};
use trading_strategies::SignalRegistry;

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;

    let mut orchestrator_config = config.orchestrator_config()?;
    if args.live {
        orchestrator_config.mode = ExecutionMode::Live;
    }

    let data_dir = args.data_dir.unwrap_or_else(|| config.paper.data_dir.clone());
    let signal = args.signal.unwrap_or_else(|| config.paper.signal.clone());

    let data = Arc::new(
        CsvMarketData::new(&data_dir)
            .with_context(|| format!("opening data directory {}", data_dir.display()))?,
    );
    let signals = SignalRegistry::new().create(&signal)?;
    let execution = Arc::new(PaperBroker::new(config.paper.initial_balance));

    info!(
        app = %config.app.name,
        environment = %config.app.environment,
        data_dir = %data_dir.display(),
        signal = %signal,
        balance = %config.paper.initial_balance,
        "Starting orchestrator"
    );

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let mut orchestrator = Orchestrator::new(orchestrator_config, data, signals, execution)?
        .with_sleeper(Arc::new(shutdown));
    orchestrator.run().await?;

    info!(
        open_positions = orchestrator.positions().total(),
        "Orchestrator exited"
    );
    Ok(())
}
