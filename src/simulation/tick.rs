//! Tick driver - ties the kitchen and the policy table together
//!
//! Each tick runs:
//! choose actions -> kitchen step -> policy update -> reward backprop -> scheduled spawn
//!
//! Everything is sequential; policy reads for action choice happen before
//! the step mutates the kitchen.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::core::config::{DecisionMode, SimulationConfig};
use crate::core::error::Result;
use crate::core::types::{Action, Tick};
use crate::kitchen::{EventKind, Kitchen, SpawnSchedule};
use crate::policy::PolicyMap;

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub actions: Vec<Action>,
    pub rewards: Vec<f32>,
    /// Cells whose policy received a backpropagated update
    pub backprops: usize,
    /// The spawner ran and placed items
    pub spawned: bool,
}

/// Owns a kitchen, its policy table and the run RNG
pub struct Trainer {
    pub kitchen: Kitchen,
    pub policies: PolicyMap,
    schedule: SpawnSchedule,
    decision: DecisionMode,
    progress_every: u64,
    rng: ChaCha8Rng,
    seed: u64,
    tick: Tick,
}

impl Trainer {
    pub fn new(kitchen: Kitchen, config: &SimulationConfig, seed: u64) -> Self {
        let policies = PolicyMap::new(kitchen.bounds, config.learning);
        Self {
            kitchen,
            policies,
            schedule: config.spawner,
            decision: config.run.decision,
            progress_every: config.run.progress_every,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            tick: 1,
        }
    }

    /// Validate the config, build its scenario and seed the RNG
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let kitchen = config.scenario.build(config.rewards)?;
        let seed = config.run.seed.unwrap_or_else(|| rand::random());
        Ok(Self::new(kitchen, config, seed))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The tick the next call to `tick` will run
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn decision(&self) -> DecisionMode {
        self.decision
    }

    pub fn set_decision(&mut self, decision: DecisionMode) {
        self.decision = decision;
    }

    /// One action per agent from the policy at its cell
    pub fn choose_actions(&mut self) -> Vec<Action> {
        let positions = self.kitchen.agent_positions();
        match self.decision {
            DecisionMode::Sample => positions
                .into_iter()
                .map(|pos| self.policies.sample(pos, &mut self.rng))
                .collect(),
            DecisionMode::Greedy => positions.into_iter().map(|pos| self.policies.best(pos)).collect(),
        }
    }

    pub fn tick(&mut self) -> Result<TickReport> {
        let previous = self.kitchen.agent_positions();
        let actions = self.choose_actions();

        let outcome = self.kitchen.step(&actions)?;

        // The taken action is credited at the cell the agent ended up in
        let mut backprops = 0;
        let current = self.kitchen.agent_positions();
        for (i, (&before, &after)) in previous.iter().zip(current.iter()).enumerate() {
            let reward = outcome.rewards[i];
            self.policies.update(after, actions[i], reward);
            if before != after && self.policies.backpropagate(before, after, reward).is_some() {
                backprops += 1;
            }
        }

        let spawned = self.schedule.is_due(self.tick) && self.kitchen.spawn_training_items(&mut self.rng);

        let report = TickReport {
            tick: self.tick,
            actions,
            rewards: outcome.rewards,
            backprops,
            spawned,
        };
        debug!(
            tick = report.tick,
            actions = %report.actions.iter().map(|a| a.symbol()).collect::<String>(),
            rewards = ?report.rewards,
            "tick complete"
        );

        if self.progress_every > 0 && self.tick % self.progress_every == 0 {
            let events = self.kitchen.events();
            info!(
                tick = self.tick,
                total_reward = self.kitchen.total_reward(),
                onion_get = events.get(EventKind::OnionGet),
                onion_chop = events.get(EventKind::OnionChop),
                onion_cook = events.get(EventKind::OnionCook),
                soup_deliver = events.get(EventKind::SoupDeliver),
                "training progress"
            );
        }

        self.tick += 1;
        Ok(report)
    }

    /// Run `steps` ticks, handing every report to `observer`
    pub fn run<F>(&mut self, steps: u64, mut observer: F) -> Result<()>
    where
        F: FnMut(&Trainer, &TickReport),
    {
        for _ in 0..steps {
            let report = self.tick()?;
            observer(self, &report);
        }
        Ok(())
    }
}
