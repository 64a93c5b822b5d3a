pub mod config;
pub mod error;
pub mod types;

pub use config::{DecisionMode, RunConfig, SimulationConfig};
pub use error::{Result, SimError};
pub use types::{Action, Position, Tick};
