//! Learning parameters for the tabular policy

use serde::{Deserialize, Serialize};

/// Step size of every policy update
pub const LEARNING_RATE: f32 = 0.1;

/// Lowest probability a penalised action can be pushed to
pub const PROBABILITY_FLOOR: f32 = 0.05;

/// Share of a reward passed back to the cell an agent just left
pub const BACKPROP_DISCOUNT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub learning_rate: f32,
    pub probability_floor: f32,
    pub backprop_discount: f32,
    /// Reinforce the move into a rewarding cell at the previous cell
    pub backprop: bool,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            probability_floor: PROBABILITY_FLOOR,
            backprop_discount: BACKPROP_DISCOUNT,
            backprop: true,
        }
    }
}
