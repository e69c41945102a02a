//! Orchestrator configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use trading_core::types::{SessionWindow, Timeframe};
use trading_core::TradingError;
use trading_risk::RiskParameters;

/// What the orchestrator does with an actionable signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Log the intent to trade; never call the execution layer.
    #[default]
    SignalOnly,
    /// Size and place orders, tracking open trades per instrument.
    ///
    /// Only Accepted or Filled orders are counted when placed. A Pending
    /// order is counted once reconciliation sees it as an open position, so
    /// with a broker that fills slower than the poll interval the next cycle
    /// can admit the instrument again and exceed the per-instrument cap.
    Live,
}

/// Everything the orchestrator needs besides its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Instruments in poll order
    pub instruments: Vec<String>,
    pub session: SessionWindow,
    pub timeframe: Timeframe,
    /// Bars requested per poll
    pub bar_count: usize,
    pub risk: RiskParameters,
    /// Pause after an in-session cycle
    pub poll_interval: Duration,
    /// Pause after an out-of-session check
    pub idle_interval: Duration,
    pub mode: ExecutionMode,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            instruments: ["EURUSD", "GBPUSD", "USDJPY", "USDCHF", "AUDUSD", "USDCAD", "NZDUSD"]
                .into_iter()
                .map(String::from)
                .collect(),
            session: SessionWindow::default(),
            timeframe: Timeframe::Hour1,
            bar_count: 100,
            risk: RiskParameters::default(),
            poll_interval: Duration::from_secs(60),
            idle_interval: Duration::from_secs(300),
            mode: ExecutionMode::SignalOnly,
        }
    }
}

impl OrchestratorConfig {
    /// Configuration with the given instruments and defaults elsewhere.
    pub fn with_instruments<I, S>(instruments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instruments: instruments.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Reject configurations the orchestrator cannot run with.
    pub fn validate(&self) -> Result<(), TradingError> {
        if self.instruments.is_empty() {
            return Err(TradingError::Config("no instruments configured".to_string()));
        }

        let mut seen = HashSet::new();
        for instrument in &self.instruments {
            if instrument.trim().is_empty() {
                return Err(TradingError::Config("empty instrument symbol".to_string()));
            }
            if !seen.insert(instrument.as_str()) {
                return Err(TradingError::Config(format!(
                    "duplicate instrument: {}",
                    instrument
                )));
            }
        }

        if self.bar_count == 0 {
            return Err(TradingError::Config("bar_count must be positive".to_string()));
        }
        if self.poll_interval.is_zero() || self.idle_interval.is_zero() {
            return Err(TradingError::Config(
                "poll and idle intervals must be positive".to_string(),
            ));
        }

        self.risk
            .validate()
            .map_err(|e| TradingError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.instruments.len(), 7);
        assert_eq!(config.instruments[0], "EURUSD");
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.idle_interval, Duration::from_secs(300));
        assert_eq!(config.mode, ExecutionMode::SignalOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_instrument_lists() {
        let empty = OrchestratorConfig::with_instruments(Vec::<String>::new());
        assert!(empty.validate().is_err());

        let dupes = OrchestratorConfig::with_instruments(["EURUSD", "GBPUSD", "EURUSD"]);
        let err = dupes.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate instrument: EURUSD"));
    }

    #[test]
    fn test_rejects_zero_values() {
        let config = OrchestratorConfig {
            bar_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OrchestratorConfig {
            poll_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = OrchestratorConfig::default();
        config.risk.max_concurrent_per_instrument = 0;
        assert!(config.validate().is_err());
    }
}
