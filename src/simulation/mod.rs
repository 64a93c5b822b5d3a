//! Training driver
//!
//! Runs the kitchen under a per-cell policy table and summarises the run.

pub mod output;
pub mod tick;

pub use output::{AgentSnapshot, RunSummary};
pub use tick::{TickReport, Trainer};
