//! Session-gated polling orchestrator.
//!
//! The [`Orchestrator`] owns the control flow of the system: it checks the
//! trading session, walks the configured instruments in order, applies
//! per-instrument admission control, asks the signal source for a decision
//! and forwards actionable decisions toward execution. Every collaborator is
//! held behind a trait object, and time is injected through [`Clock`] and
//! [`Sleeper`] so the loop can be driven without real delays.

mod clock;
mod config;
mod orchestrator;
mod position_book;
mod shutdown;

pub use clock::{Clock, SystemClock};
pub use config::{ExecutionMode, OrchestratorConfig};
pub use orchestrator::{CycleOutcome, CycleReport, InstrumentOutcome, Orchestrator};
pub use position_book::PositionBook;
pub use shutdown::{Shutdown, Sleeper};
