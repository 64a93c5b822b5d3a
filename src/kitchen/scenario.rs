//! Scenario construction
//!
//! A scenario lists the agents, starting floor items and stations of a
//! kitchen. Grid bounds are derived from the entities: the larger of the
//! configured minimum and every entity coordinate.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Position;
use crate::kitchen::agent::Agent;
use crate::kitchen::item::{Item, ItemKind};
use crate::kitchen::rewards::RewardTable;
use crate::kitchen::station::{Station, StationKind};
use crate::kitchen::world::Kitchen;
use crate::spatial::GridBounds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSpec {
    /// Tag-encoded name, e.g. `"O1"`
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// Serializable scenario description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: String,
    pub min_width: i32,
    pub min_height: i32,
    pub agents: Vec<AgentSpec>,
    pub items: Vec<ItemSpec>,
    pub stations: Vec<StationSpec>,
}

impl Default for ScenarioConfig {
    /// Two chefs, two loose onions and one station of each kind
    fn default() -> Self {
        let agent = |name: &str, x, y| AgentSpec { name: name.into(), x, y };
        let station = |name: &str, x, y| StationSpec { name: name.into(), x, y };

        Self {
            name: "env-1".into(),
            min_width: 5,
            min_height: 5,
            agents: vec![agent("a1", 1, 1), agent("a2", 1, 4)],
            items: vec![
                ItemSpec { kind: ItemKind::RawOnion, x: 2, y: 4 },
                ItemSpec { kind: ItemKind::RawOnion, x: 4, y: 2 },
            ],
            stations: vec![
                station("O1", 4, 1),
                station("C1", 9, 1),
                station("S1", 9, 5),
                station("D1", 5, 5),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn build(&self, rewards: RewardTable) -> Result<Kitchen> {
        let mut builder = KitchenBuilder::new(&self.name)
            .min_size(self.min_width, self.min_height)
            .rewards(rewards);

        for spec in &self.agents {
            builder = builder.agent(&spec.name, spec.x, spec.y);
        }
        for spec in &self.items {
            builder = builder.item(spec.kind, spec.x, spec.y);
        }
        for spec in &self.stations {
            builder = builder.with_station(Station::from_name(&spec.name, Position::new(spec.x, spec.y))?);
        }

        builder.build()
    }
}

/// Fluent kitchen construction, validated on `build`
#[derive(Debug, Clone)]
pub struct KitchenBuilder {
    name: String,
    min_bounds: GridBounds,
    rewards: RewardTable,
    agents: Vec<Agent>,
    items: Vec<Item>,
    stations: Vec<Station>,
}

impl KitchenBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_bounds: GridBounds::new(5, 5),
            rewards: RewardTable::default(),
            agents: Vec::new(),
            items: Vec::new(),
            stations: Vec::new(),
        }
    }

    pub fn min_size(mut self, width: i32, height: i32) -> Self {
        self.min_bounds = GridBounds::new(width, height);
        self
    }

    pub fn rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn agent(mut self, name: &str, x: i32, y: i32) -> Self {
        self.agents.push(Agent::new(name, Position::new(x, y)));
        self
    }

    pub fn item(mut self, kind: ItemKind, x: i32, y: i32) -> Self {
        self.items.push(Item::new(kind, Position::new(x, y)));
        self
    }

    /// Add a station, numbered after the existing ones of its kind
    pub fn station(self, kind: StationKind, x: i32, y: i32) -> Self {
        let instance = self.stations.iter().filter(|s| s.kind == kind).count() as u32 + 1;
        self.with_station(Station::new(kind, instance, Position::new(x, y)))
    }

    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    pub fn build(self) -> Result<Kitchen> {
        let positions = self
            .agents
            .iter()
            .map(|a| a.position)
            .chain(self.items.iter().map(|i| i.position))
            .chain(self.stations.iter().map(|s| s.position));

        if let Some(pos) = positions.clone().find(|p| p.x < 0 || p.y < 0) {
            return Err(SimError::InvalidScenario(format!("negative coordinate {}", pos)));
        }
        if self.min_bounds.width < 0 || self.min_bounds.height < 0 {
            return Err(SimError::InvalidScenario("minimum size must not be negative".into()));
        }

        for (i, agent) in self.agents.iter().enumerate() {
            if let Some(other) = self.agents[..i].iter().find(|a| a.position == agent.position) {
                return Err(SimError::InvalidScenario(format!(
                    "agents {} and {} share cell {}",
                    other.name, agent.name, agent.position
                )));
            }
        }

        let bounds = GridBounds::covering(self.min_bounds, positions);

        Ok(Kitchen::new(
            self.name,
            self.agents,
            self.items,
            self.stations,
            bounds,
            self.rewards,
        ))
    }
}
