//! Signal source implementations.
//!
//! Only a neutral placeholder ships with the workspace. Proprietary signal
//! logic implements [`trading_core::traits::SignalSource`] and is registered
//! with the [`SignalRegistry`].

mod neutral;
mod registry;

pub use neutral::NeutralSignal;
pub use registry::{SignalInfo, SignalRegistry};
