//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter
pub type Tick = u64;

/// Integer grid coordinate
///
/// Doubles as the key of the tabular policy: learned behavior is indexed by
/// location only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in the given direction (no bounds check)
    pub fn offset(self, action: Action) -> Self {
        let (dx, dy) = action.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The six discrete agent actions
///
/// Discriminants are the canonical action ids. Every walk over the action set
/// (sampling, argmax, renormalisation) uses `Action::ALL`, which is ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Action {
    None = 0,
    North = 1,
    South = 2,
    East = 3,
    West = 4,
    Interact = 5,
}

impl Action {
    pub const COUNT: usize = 6;

    pub const ALL: [Action; Action::COUNT] = [
        Action::None,
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Interact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// Grid displacement; north is towards y = 0
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::North => (0, -1),
            Action::South => (0, 1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::None | Action::Interact => (0, 0),
        }
    }

    pub fn is_move(self) -> bool {
        matches!(self, Action::North | Action::South | Action::East | Action::West)
    }

    /// Infer the move that takes `from` to `to`
    ///
    /// Anything other than a single orthogonal step yields `Action::None`.
    pub fn from_displacement(from: Position, to: Position) -> Action {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Action::North,
            (0, 1) => Action::South,
            (1, 0) => Action::East,
            (-1, 0) => Action::West,
            _ => Action::None,
        }
    }

    /// One-letter code used in logs: `_ N S E W I`
    pub fn symbol(self) -> char {
        match self {
            Action::None => '_',
            Action::North => 'N',
            Action::South => 'S',
            Action::East => 'E',
            Action::West => 'W',
            Action::Interact => 'I',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_ids() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(6), None);
    }

    #[test]
    fn test_offset() {
        let p = Position::new(3, 3);
        assert_eq!(p.offset(Action::North), Position::new(3, 2));
        assert_eq!(p.offset(Action::South), Position::new(3, 4));
        assert_eq!(p.offset(Action::East), Position::new(4, 3));
        assert_eq!(p.offset(Action::West), Position::new(2, 3));
        assert_eq!(p.offset(Action::Interact), p);
        assert_eq!(p.offset(Action::None), p);
    }

    #[test]
    fn test_from_displacement_round_trips_moves() {
        let origin = Position::new(5, 5);
        for action in Action::ALL.iter().copied().filter(|a| a.is_move()) {
            assert_eq!(Action::from_displacement(origin, origin.offset(action)), action);
        }
    }

    #[test]
    fn test_from_displacement_rejects_jumps() {
        let origin = Position::new(5, 5);
        assert_eq!(Action::from_displacement(origin, origin), Action::None);
        assert_eq!(Action::from_displacement(origin, Position::new(6, 6)), Action::None);
        assert_eq!(Action::from_displacement(origin, Position::new(7, 5)), Action::None);
    }
}
