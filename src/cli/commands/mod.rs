//! CLI command implementations.

pub mod run;
pub mod signals;
pub mod size;
pub mod validate;
