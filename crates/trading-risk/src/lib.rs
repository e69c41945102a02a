//! Risk management for the orchestrator.
//!
//! Provides the placeholder lot-size formula and the per-instrument risk
//! parameters. Portfolio-aware sizing is expected to replace [`RiskSizer`]
//! entirely; only its contract is stable.

mod parameters;
mod position_sizer;

pub use parameters::RiskParameters;
pub use position_sizer::RiskSizer;
