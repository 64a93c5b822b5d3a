//! Per-cell policy table
//!
//! Behavior is keyed by grid position alone. The map covers every cell of
//! the kitchen and starts out uniform everywhere.

use ahash::AHashMap;
use rand::Rng;

use crate::core::types::{Action, Position};
use crate::policy::learning::LearningConfig;
use crate::policy::table::Policy;
use crate::spatial::GridBounds;

#[derive(Debug, Clone)]
pub struct PolicyMap {
    bounds: GridBounds,
    learning: LearningConfig,
    policies: AHashMap<Position, Policy>,
}

impl PolicyMap {
    pub fn new(bounds: GridBounds, learning: LearningConfig) -> Self {
        let policies = bounds.cells().map(|pos| (pos, Policy::uniform())).collect();
        Self {
            bounds,
            learning,
            policies,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn get(&self, pos: Position) -> Option<&Policy> {
        self.policies.get(&pos)
    }

    /// Policy at `pos`, uniform for cells outside the map
    pub fn policy(&self, pos: Position) -> Policy {
        self.policies.get(&pos).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Policy)> {
        self.policies.iter()
    }

    pub fn sample<R: Rng + ?Sized>(&self, pos: Position, rng: &mut R) -> Action {
        self.policy(pos).sample(rng)
    }

    pub fn best(&self, pos: Position) -> Action {
        self.policy(pos).best()
    }

    /// Replace the policy at `pos` with its updated copy
    pub fn update(&mut self, pos: Position, action: Action, reward: f32) {
        let updated = self.policy(pos).update_with(action, reward, &self.learning);
        self.policies.insert(pos, updated);
    }

    /// Pass a discounted reward back to the cell an agent just left
    ///
    /// Only a single orthogonal step with a positive discounted reward is
    /// reinforced; returns the inferred move when an update happened.
    pub fn backpropagate(&mut self, previous: Position, current: Position, reward: f32) -> Option<Action> {
        if !self.learning.backprop || previous == current {
            return None;
        }

        let action = Action::from_displacement(previous, current);
        let discounted = reward * self.learning.backprop_discount;
        if action == Action::None || discounted <= 0.0 {
            return None;
        }

        self.update(previous, action, discounted);
        Some(action)
    }

    /// Greedy action of every cell as a text grid of action symbols
    pub fn render_best(&self) -> String {
        let mut out = String::new();
        for y in 0..=self.bounds.height {
            for x in 0..=self.bounds.width {
                out.push(self.best(Position::new(x, y)).symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> PolicyMap {
        PolicyMap::new(GridBounds::new(3, 2), LearningConfig::default())
    }

    #[test]
    fn test_covers_every_cell() {
        let map = map();
        assert_eq!(map.len(), 12);
        assert!(map.get(Position::new(3, 2)).is_some());
        assert!(map.get(Position::new(4, 2)).is_none());
        assert!(map.iter().all(|(_, p)| *p == Policy::uniform()));
    }

    #[test]
    fn test_update_only_touches_one_cell() {
        let mut map = map();
        map.update(Position::new(1, 1), Action::Interact, 1.0);
        assert_eq!(map.best(Position::new(1, 1)), Action::Interact);
        assert_eq!(map.policy(Position::new(1, 2)), Policy::uniform());
    }

    #[test]
    fn test_backprop_reinforces_inferred_move() {
        let mut map = map();
        let reinforced = map.backpropagate(Position::new(1, 1), Position::new(2, 1), 0.5);
        assert_eq!(reinforced, Some(Action::East));
        assert_eq!(map.best(Position::new(1, 1)), Action::East);

        let expected = Policy::uniform().update(Action::East, 0.25);
        assert_eq!(map.policy(Position::new(1, 1)), expected);
    }

    #[test]
    fn test_backprop_skips_negative_and_still() {
        let mut map = map();
        assert_eq!(map.backpropagate(Position::new(1, 1), Position::new(1, 0), -0.1), None);
        assert_eq!(map.backpropagate(Position::new(1, 1), Position::new(1, 1), 1.0), None);
        assert_eq!(map.backpropagate(Position::new(0, 0), Position::new(2, 2), 1.0), None);
        assert!(map.iter().all(|(_, p)| *p == Policy::uniform()));
    }

    #[test]
    fn test_backprop_can_be_disabled() {
        let learning = LearningConfig { backprop: false, ..LearningConfig::default() };
        let mut map = PolicyMap::new(GridBounds::new(3, 2), learning);
        assert_eq!(map.backpropagate(Position::new(1, 1), Position::new(1, 2), 1.0), None);
    }

    #[test]
    fn test_render_best() {
        let mut map = PolicyMap::new(GridBounds::new(1, 0), LearningConfig::default());
        map.update(Position::new(1, 0), Action::West, 1.0);
        assert_eq!(map.render_best(), "_W\n");
    }
}
