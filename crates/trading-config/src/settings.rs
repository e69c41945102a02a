//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use trading_core::types::{SessionWindow, Timeframe};
use trading_engine::{ExecutionMode, OrchestratorConfig};
use trading_risk::RiskParameters;

use crate::ConfigError;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub instruments: InstrumentSettings,
    #[serde(default)]
    pub risk: RiskParameters,
    #[serde(default)]
    pub polling: PollingSettings,
    #[serde(default)]
    pub execution: ExecutionSettings,
    #[serde(default)]
    pub paper: PaperSettings,
}

impl AppConfig {
    /// Check every section, failing on the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orchestrator_config().map(|_| ())
    }

    /// Build the validated orchestrator configuration.
    pub fn orchestrator_config(&self) -> Result<OrchestratorConfig, ConfigError> {
        let session = SessionWindow::parse(&self.session.start, &self.session.end)
            .map_err(|e| ConfigError::Invalid(format!("session: {}", e)))?;
        let timeframe = Timeframe::from_str(&self.instruments.timeframe)
            .map_err(|e| ConfigError::Invalid(format!("instruments.timeframe: {}", e)))?;

        let config = OrchestratorConfig {
            instruments: self.instruments.symbols.clone(),
            session,
            timeframe,
            bar_count: self.instruments.bar_count,
            risk: self.risk.clone(),
            poll_interval: Duration::from_secs(self.polling.poll_interval_secs),
            idle_interval: Duration::from_secs(self.polling.idle_interval_secs),
            mode: self.execution.mode,
        };
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.paper.initial_balance < Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "paper.initial_balance must not be negative, got {}",
                self.paper.initial_balance
            )));
        }

        Ok(config)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "trading-orchestrator".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// Optional log file, written in addition to stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Trading session, as UTC times of day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub start: String,
    pub end: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "12:00".to_string(),
        }
    }
}

/// Instruments to poll and how much history to request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentSettings {
    /// Symbols in poll order
    pub symbols: Vec<String>,
    pub timeframe: String,
    pub bar_count: usize,
}

impl Default for InstrumentSettings {
    fn default() -> Self {
        let defaults = OrchestratorConfig::default();
        Self {
            symbols: defaults.instruments,
            timeframe: defaults.timeframe.to_string(),
            bar_count: defaults.bar_count,
        }
    }
}

/// Loop cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    pub poll_interval_secs: u64,
    pub idle_interval_secs: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
            idle_interval_secs: 300,
        }
    }
}

/// Execution behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExecutionSettings {
    pub mode: ExecutionMode,
}

/// Local adapters used by the `run` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperSettings {
    pub initial_balance: Decimal,
    /// Directory with one CSV file per instrument
    pub data_dir: PathBuf,
    /// Signal source name
    pub signal: String,
}

impl Default for PaperSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            initial_balance: dec!(10000),
            data_dir: PathBuf::from("data"),
            signal: "neutral".to_string(),
        }
    }
}
