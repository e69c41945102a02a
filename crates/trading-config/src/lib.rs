//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, ExecutionSettings, InstrumentSettings, LoggingConfig, PaperSettings,
    PollingSettings, SessionSettings,
};

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Configuration errors. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration from file and environment, then validate it.
///
/// Environment variables prefixed with `TRADING__` override file values,
/// e.g. `TRADING__RISK__RISK_FRACTION=0.02`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("TRADING")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()?;
    Ok(app)
}
