//! Run summary and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Position, Tick};
use crate::kitchen::{EventCounters, EventKind, ItemKind};
use crate::simulation::tick::Trainer;

/// Final state of one agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub position: Position,
    pub inventory: Option<ItemKind>,
}

/// Everything worth keeping from a training run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub scenario: String,
    pub seed: u64,
    pub ticks: Tick,
    pub total_reward: f64,
    pub events: EventCounters,
    pub items_on_floor: usize,
    pub agents: Vec<AgentSnapshot>,
    pub simulation_time_ms: u64,
}

impl RunSummary {
    pub fn new(trainer: &Trainer, elapsed: Duration) -> Self {
        let kitchen = &trainer.kitchen;
        Self {
            scenario: kitchen.name.clone(),
            seed: trainer.seed(),
            ticks: trainer.current_tick().saturating_sub(1),
            total_reward: kitchen.total_reward(),
            events: kitchen.events().clone(),
            items_on_floor: kitchen.items.len(),
            agents: kitchen
                .agents
                .iter()
                .map(|a| AgentSnapshot {
                    name: a.name.clone(),
                    position: a.position,
                    inventory: a.inventory,
                })
                .collect(),
            simulation_time_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Ran {} ticks of {} (seed {}) in {}ms\nTotal reward {:.2}; onions {} fetched, {} chopped, {} cooked; {} soups delivered",
            self.ticks,
            self.scenario,
            self.seed,
            self.simulation_time_ms,
            self.total_reward,
            self.events.get(EventKind::OnionGet),
            self.events.get(EventKind::OnionChop),
            self.events.get(EventKind::OnionCook),
            self.events.get(EventKind::SoupDeliver),
        )
    }
}
