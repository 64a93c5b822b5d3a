//! Position lookup over entity collections
//!
//! Collections are small (a handful of agents, items and stations), so every
//! query is a linear scan in insertion order. When two entities share a cell
//! the first one inserted wins.

use crate::core::types::Position;

/// Anything that occupies a single grid cell
pub trait Located {
    fn position(&self) -> Position;
}

/// Index of the first entity at `pos`
#[inline]
pub fn index_at<T: Located>(entities: &[T], pos: Position) -> Option<usize> {
    entities.iter().position(|e| e.position() == pos)
}

/// First entity at `pos`
#[inline]
pub fn first_at<T: Located>(entities: &[T], pos: Position) -> Option<&T> {
    entities.iter().find(|e| e.position() == pos)
}

#[inline]
pub fn is_occupied<T: Located>(entities: &[T], pos: Position) -> bool {
    entities.iter().any(|e| e.position() == pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker {
        id: u32,
        pos: Position,
    }

    impl Located for Marker {
        fn position(&self) -> Position {
            self.pos
        }
    }

    #[test]
    fn test_first_match_wins() {
        let markers = vec![
            Marker { id: 1, pos: Position::new(0, 0) },
            Marker { id: 2, pos: Position::new(2, 2) },
            Marker { id: 3, pos: Position::new(2, 2) },
        ];
        assert_eq!(first_at(&markers, Position::new(2, 2)).map(|m| m.id), Some(2));
        assert_eq!(index_at(&markers, Position::new(2, 2)), Some(1));
    }

    #[test]
    fn test_missing_cell() {
        let markers = vec![Marker { id: 1, pos: Position::new(0, 0) }];
        assert!(first_at(&markers, Position::new(1, 0)).is_none());
        assert!(!is_occupied(&markers, Position::new(1, 0)));
        assert!(is_occupied(&markers, Position::new(0, 0)));
    }
}
