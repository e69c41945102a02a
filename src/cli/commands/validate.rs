//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use trading_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Session: {} - {} UTC", config.session.start, config.session.end);
            println!("Instruments: {}", config.instruments.symbols.join(", "));
            println!("Timeframe: {}", config.instruments.timeframe);
            println!("Bars per poll: {}", config.instruments.bar_count);
            println!("Risk per trade: {}", config.risk.risk_fraction);
            println!("Max open per instrument: {}", config.risk.max_concurrent_per_instrument);
            println!(
                "Polling: every {}s in session, {}s outside",
                config.polling.poll_interval_secs, config.polling.idle_interval_secs
            );
            println!("Execution mode: {:?}", config.execution.mode);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
