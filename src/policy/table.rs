//! A probability distribution over the six actions
//!
//! Probabilities are stored in canonical action order so sampling, argmax
//! and renormalisation are reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Action;
use crate::policy::learning::LearningConfig;

/// Tolerance for the sum-to-one invariant
pub const SUM_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    probs: [f32; Action::COUNT],
}

impl Default for Policy {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Policy {
    /// Every action equally likely
    pub fn uniform() -> Self {
        Self {
            probs: [1.0 / Action::COUNT as f32; Action::COUNT],
        }
    }

    /// Build from explicit probabilities in canonical order
    ///
    /// Returns None unless every entry is non-negative and they sum to one.
    pub fn from_probabilities(probs: [f32; Action::COUNT]) -> Option<Self> {
        let policy = Self { probs };
        let valid = probs.iter().all(|p| *p >= 0.0) && policy.is_normalized();
        valid.then_some(policy)
    }

    pub fn probability(&self, action: Action) -> f32 {
        self.probs[action.index()]
    }

    pub fn probabilities(&self) -> &[f32; Action::COUNT] {
        &self.probs
    }

    pub fn sum(&self) -> f32 {
        self.probs.iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_TOLERANCE
    }

    /// Draw an action
    ///
    /// Walks actions in canonical order and returns the first whose cumulative
    /// probability reaches a uniform draw from [0, 1).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        let r: f32 = rng.gen();
        let mut cumulative = 0.0;
        for action in Action::ALL {
            cumulative += self.probs[action.index()];
            if r <= cumulative {
                return action;
            }
        }
        // Only reachable through rounding when the sum is a hair under one
        Action::None
    }

    /// Most probable action
    ///
    /// Scans in canonical order against a 0.0 baseline; the first strictly
    /// greater entry wins ties. A policy with no positive entry yields `None`.
    pub fn best(&self) -> Action {
        let mut best_action = Action::None;
        let mut best_prob = 0.0;
        for action in Action::ALL {
            let prob = self.probs[action.index()];
            if prob > best_prob {
                best_prob = prob;
                best_action = action;
            }
        }
        best_action
    }

    /// Reinforce `action` with the default learning parameters
    pub fn update(&self, action: Action, reward: f32) -> Policy {
        self.update_with(action, reward, &LearningConfig::default())
    }

    /// Move probability mass towards (reward > 0) or away from (reward < 0) `action`
    ///
    /// A zero reward returns an identical copy. Other actions are rescaled
    /// proportionally so the distribution still sums to one.
    ///
    /// `learning_rate * |reward|` must not exceed 1, otherwise a probability
    /// leaves [0, 1]. `SimulationConfig::validate` enforces this for configured
    /// reward tables.
    pub fn update_with(&self, action: Action, reward: f32, learning: &LearningConfig) -> Policy {
        debug_assert!(
            learning.learning_rate * reward.abs() <= 1.0,
            "update step {} * {} overshoots a probability",
            learning.learning_rate,
            reward
        );
        let mut next = *self;
        if reward == 0.0 {
            return next;
        }

        let chosen = action.index();
        let current = self.probs[chosen];

        let mut delta = if reward > 0.0 {
            learning.learning_rate * reward * (1.0 - current)
        } else {
            learning.learning_rate * reward * current
        };
        if reward < 0.0 && current + delta < learning.probability_floor {
            delta = learning.probability_floor - current;
        }

        let updated = current + delta;
        next.probs[chosen] = updated;

        let remaining = 1.0 - updated;
        let others_total: f32 = self
            .probs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != chosen)
            .map(|(_, p)| *p)
            .sum();

        if others_total > 0.0 {
            for (i, prob) in next.probs.iter_mut().enumerate() {
                if i != chosen {
                    *prob = self.probs[i] * remaining / others_total;
                }
            }
        } else {
            let share = remaining / (Action::COUNT - 1) as f32;
            for (i, prob) in next.probs.iter_mut().enumerate() {
                if i != chosen {
                    *prob = share;
                }
            }
        }

        next
    }
}
