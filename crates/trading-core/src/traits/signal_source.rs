//! Signal source contract.

use crate::error::SignalError;
use crate::types::{BarSeries, Signal};

/// Turns recent bars into a trade decision.
///
/// Implementations may keep internal state (model weights, caches), but the
/// orchestrator treats every call as independent.
pub trait SignalSource: Send + Sync {
    /// Produce a decision for `instrument` from `bars`.
    ///
    /// An empty or short series is not an error: return [`Signal::none`].
    fn generate_signal(&self, instrument: &str, bars: &BarSeries) -> Result<Signal, SignalError>;

    /// Get the unique name of this source.
    fn name(&self) -> &str;

    /// Get a description of the source.
    fn description(&self) -> &str {
        ""
    }
}
