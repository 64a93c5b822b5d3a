//! Kitchen simulation engine
//!
//! Agents walk a bounded grid, take onions from a source, chop and cook them,
//! and deliver soup for reward. The `Kitchen` owns all entities and applies
//! one batch of actions per tick.

pub mod agent;
pub mod interaction;
pub mod item;
pub mod render;
pub mod rewards;
pub mod scenario;
pub mod spawner;
pub mod station;
pub mod world;

pub use agent::Agent;
pub use interaction::Outcome;
pub use item::{Item, ItemKind};
pub use render::RenderCell;
pub use rewards::{EventCounters, EventKind, RewardTable};
pub use scenario::{KitchenBuilder, ScenarioConfig};
pub use spawner::SpawnSchedule;
pub use station::{Station, StationKind};
pub use world::{Kitchen, StepOutcome};
