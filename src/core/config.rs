//! Run configuration with documented defaults
//!
//! Every tunable number of a training run lives here or in the section type
//! it configures. The whole tree deserialises from a single TOML document;
//! missing sections and fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::kitchen::rewards::RewardTable;
use crate::kitchen::scenario::ScenarioConfig;
use crate::kitchen::spawner::SpawnSchedule;
use crate::policy::LearningConfig;

/// How the driver turns a policy into an action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// Draw from the policy distribution (training)
    #[default]
    Sample,
    /// Always take the most probable action
    Greedy,
}

/// Driver-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of ticks to run
    pub max_steps: u64,

    /// RNG seed; a random seed is drawn when absent
    pub seed: Option<u64>,

    pub decision: DecisionMode,

    /// Render the grid every N ticks (0 disables rendering)
    pub render_every: u64,

    /// Log a progress line every N ticks (0 disables)
    pub progress_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: 5000,
            seed: None,
            decision: DecisionMode::Sample,
            render_every: 0,
            progress_every: 500,
        }
    }
}

/// Complete configuration of a training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scenario: ScenarioConfig,
    pub rewards: RewardTable,
    pub learning: LearningConfig,
    pub spawner: SpawnSchedule,
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let learning = &self.learning;

        if !(learning.learning_rate > 0.0 && learning.learning_rate <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "learning_rate ({}) must be in (0, 1]",
                learning.learning_rate
            )));
        }

        // The floor has to leave room for a uniform start
        let uniform = 1.0 / crate::core::types::Action::COUNT as f32;
        if !(0.0..=uniform).contains(&learning.probability_floor) {
            return Err(SimError::InvalidConfig(format!(
                "probability_floor ({}) must be in [0, {:.4}]",
                learning.probability_floor, uniform
            )));
        }

        if !(0.0..=1.0).contains(&learning.backprop_discount) {
            return Err(SimError::InvalidConfig(format!(
                "backprop_discount ({}) must be in [0, 1]",
                learning.backprop_discount
            )));
        }

        // A step larger than the remaining mass would leave [0, 1]
        let largest = self.rewards.largest_magnitude();
        if largest * learning.learning_rate > 1.0 {
            return Err(SimError::InvalidConfig(format!(
                "reward magnitude {} with learning_rate {} overshoots a probability",
                largest, learning.learning_rate
            )));
        }

        if self.spawner.every == 0 {
            return Err(SimError::InvalidConfig("spawner.every must be positive".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = SimulationConfig::parse_toml("").expect("empty config should parse");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = SimulationConfig::parse_toml(
            r#"
[run]
max_steps = 12
seed = 7
decision = "greedy"

[learning]
learning_rate = 0.2
"#,
        )
        .expect("should parse");

        assert_eq!(config.run.max_steps, 12);
        assert_eq!(config.run.seed, Some(7));
        assert_eq!(config.run.decision, DecisionMode::Greedy);
        assert!((config.learning.learning_rate - 0.2).abs() < f32::EPSILON);
        assert!((config.learning.probability_floor - 0.05).abs() < f32::EPSILON);
        assert_eq!(config.spawner, SpawnSchedule::default());
    }

    #[test]
    fn test_rejects_zero_learning_rate() {
        let mut config = SimulationConfig::default();
        config.learning.learning_rate = 0.0;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_floor_above_uniform() {
        let mut config = SimulationConfig::default();
        config.learning.probability_floor = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_overshooting_reward() {
        let mut config = SimulationConfig::default();
        config.rewards.deliver_soup = 20.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_spawn_cadence() {
        let mut config = SimulationConfig::default();
        config.spawner.every = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = SimulationConfig::parse_toml("[run]\nmax_steps = \"lots\"");
        assert!(matches!(result, Err(SimError::TomlError(_))));
    }

    #[test]
    fn test_load_shipped_config() {
        let config = SimulationConfig::load(Path::new("data/kitchen.toml"))
            .expect("Should load data/kitchen.toml");
        assert_eq!(config.scenario.agents.len(), 2);
        assert_eq!(config.scenario.stations.len(), 4);
        assert_eq!(config.rewards, RewardTable::default());
        assert_eq!(config.spawner.every, 15);
    }
}
