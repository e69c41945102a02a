//! Execution adapters.

mod paper;

pub use paper::PaperBroker;
