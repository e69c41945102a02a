//! Placeholder signal source.

use tracing::trace;
use trading_core::error::SignalError;
use trading_core::traits::SignalSource;
use trading_core::types::{BarSeries, Signal};

/// Signal source that never trades.
///
/// Stands in for a real strategy so the orchestrator can be run end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSignal;

impl NeutralSignal {
    pub const NAME: &'static str = "neutral";
}

impl SignalSource for NeutralSignal {
    fn generate_signal(&self, instrument: &str, bars: &BarSeries) -> Result<Signal, SignalError> {
        trace!(instrument, bars = bars.len(), "Neutral signal");
        Ok(Signal::none())
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Never trades; placeholder for a proprietary signal source"
    }
}
