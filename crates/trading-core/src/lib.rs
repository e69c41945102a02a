//! Core types and traits for the orchestrator.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, Timeframe)
//! - Trade decisions (Signal, Direction)
//! - Order and position types exchanged with the execution layer
//! - Collaborator contracts for market data, signal generation and execution

pub mod types;
pub mod traits;
pub mod error;

pub use error::{TradingError, TradingResult};
pub use types::*;
pub use traits::*;
