//! Error types for the orchestrator and its collaborators.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Risk error: {0}")]
    Risk(#[from] RiskError),
}

/// Market data errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Network, broker or storage failure. Retried on the next cycle.
    #[error("Data unavailable for {instrument}: {reason}")]
    Unavailable { instrument: String, reason: String },

    /// The instrument is unknown to the data source. Recurs every cycle.
    #[error("Invalid instrument: {0}")]
    InvalidInstrument(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DataError {
    /// Shorthand for [`DataError::Unavailable`].
    pub fn unavailable(instrument: impl Into<String>, reason: impl Into<String>) -> Self {
        DataError::Unavailable {
            instrument: instrument.into(),
            reason: reason.into(),
        }
    }
}

/// Signal generation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid signal for {instrument}: {reason}")]
    InvalidSignal { instrument: String, reason: String },

    #[error("Signal source not found: {0}")]
    NotFound(String),

    #[error("Signal source error: {0}")]
    Internal(String),
}

/// Execution layer errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error("Order rejected: {0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Position not found: {0}")]
    PositionNotFound(String),

    #[error("Execution error: {0}")]
    Internal(String),
}

/// Risk sizing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: Decimal },
}

/// Result type alias for orchestrator operations.
pub type TradingResult<T> = Result<T, TradingError>;
