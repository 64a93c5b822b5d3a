//! Kitchen - the world state container and its step function

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::error::{Result, SimError};
use crate::core::types::{Action, Position};
use crate::kitchen::agent::Agent;
use crate::kitchen::interaction::{self, Outcome};
use crate::kitchen::item::Item;
use crate::kitchen::rewards::{EventCounters, RewardTable};
use crate::kitchen::station::Station;
use crate::spatial::{first_at, index_at, is_occupied, GridBounds};

/// Per-agent rewards of one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// One reward per agent, in agent order
    pub rewards: Vec<f32>,
    /// Always false; the kitchen has no terminal state
    pub done: bool,
}

/// The kitchen world state
///
/// Exclusively owns every agent, item and station. Agents are processed in
/// index order and each move sees the already-committed positions of the
/// agents before it.
#[derive(Debug, Clone)]
pub struct Kitchen {
    pub name: String,
    pub agents: Vec<Agent>,
    /// Items lying on the floor
    pub items: Vec<Item>,
    pub stations: Vec<Station>,
    pub bounds: GridBounds,
    pub rewards: RewardTable,
    events: EventCounters,
    total_reward: f64,
}

impl Kitchen {
    pub fn new(
        name: impl Into<String>,
        agents: Vec<Agent>,
        items: Vec<Item>,
        stations: Vec<Station>,
        bounds: GridBounds,
        rewards: RewardTable,
    ) -> Self {
        Self {
            name: name.into(),
            agents,
            items,
            stations,
            bounds,
            rewards,
            events: EventCounters::new(),
            total_reward: 0.0,
        }
    }

    /// Largest valid x coordinate
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Largest valid y coordinate
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn agent_at(&self, pos: Position) -> Option<&Agent> {
        first_at(&self.agents, pos)
    }

    pub fn item_at(&self, pos: Position) -> Option<&Item> {
        first_at(&self.items, pos)
    }

    pub fn station_at(&self, pos: Position) -> Option<&Station> {
        first_at(&self.stations, pos)
    }

    pub fn agent_positions(&self) -> Vec<Position> {
        self.agents.iter().map(|a| a.position).collect()
    }

    pub fn events(&self) -> &EventCounters {
        &self.events
    }

    /// Sum of every reward handed out so far
    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// Apply one action per agent
    ///
    /// Fails only when the action count differs from the agent count; no
    /// agent is touched in that case.
    pub fn step(&mut self, actions: &[Action]) -> Result<StepOutcome> {
        if actions.len() != self.agents.len() {
            return Err(SimError::ActionCountMismatch {
                actions: actions.len(),
                agents: self.agents.len(),
            });
        }

        let mut rewards = Vec::with_capacity(actions.len());
        for (index, &action) in actions.iter().enumerate() {
            let reward = self.apply_action(index, action);
            trace!(
                agent = %self.agents[index].name,
                action = %action.symbol(),
                position = %self.agents[index].position,
                reward,
                "agent acted"
            );
            self.total_reward += f64::from(reward);
            rewards.push(reward);
        }

        Ok(StepOutcome { rewards, done: false })
    }

    fn apply_action(&mut self, index: usize, action: Action) -> f32 {
        match action {
            Action::Interact => {
                let outcome = self.interact(index);
                self.rewards.reward_for(outcome)
            }
            Action::None => self.rewards.stalling,
            Action::North | Action::South | Action::East | Action::West => {
                let candidate = self.agents[index].position.offset(action);
                if self.bounds.contains(candidate) && !is_occupied(&self.agents, candidate) {
                    self.agents[index].position = candidate;
                    self.rewards.stalling
                } else {
                    self.rewards.invalid_action
                }
            }
        }
    }

    /// Run the interaction state machine for one agent at its current cell
    pub(crate) fn interact(&mut self, index: usize) -> Outcome {
        let pos = self.agents[index].position;
        let station = self.station_at(pos).map(|s| s.kind);
        let floor_index = index_at(&self.items, pos);
        let floor_item = floor_index.map(|i| self.items[i].kind);

        let transition = interaction::resolve(station, floor_item, self.agents[index].inventory);

        if transition.takes_floor_item {
            if let Some(i) = floor_index {
                self.items.remove(i);
            }
        }
        self.agents[index].inventory = transition.inventory;

        if let Some(event) = transition.outcome.event() {
            self.events.record(event);
        }

        if !transition.outcome.is_rejected() {
            debug!(
                agent = %self.agents[index].name,
                position = %pos,
                outcome = ?transition.outcome,
                "interaction"
            );
        }

        transition.outcome
    }
}
