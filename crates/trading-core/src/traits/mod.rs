//! Collaborator contracts.
//!
//! These are the only points where the orchestrator crosses into broker,
//! data or strategy specific code.

mod execution;
mod market_data;
mod signal_source;

pub use execution::ExecutionPort;
pub use market_data::MarketData;
pub use signal_source::SignalSource;
