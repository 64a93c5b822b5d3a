//! Inclusive rectangular grid bounds

use serde::{Deserialize, Serialize};

use crate::core::types::Position;

/// Grid extent where `width`/`height` are the largest valid coordinates
///
/// Valid cells are `[0, width] x [0, height]`, both ends inclusive, so a grid
/// with `width = 9` has ten columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Smallest bounds of at least `min` that cover every position
    pub fn covering(min: GridBounds, positions: impl IntoIterator<Item = Position>) -> Self {
        positions.into_iter().fold(min, |bounds, pos| GridBounds {
            width: bounds.width.max(pos.x),
            height: bounds.height.max(pos.y),
        })
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x <= self.width && pos.y >= 0 && pos.y <= self.height
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        ((self.width + 1).max(0) as usize) * ((self.height + 1).max(0) as usize)
    }

    /// Every cell, row by row (y outer, x inner)
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        (0..=height).flat_map(move |y| (0..=width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = GridBounds::new(5, 3);
        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.contains(Position::new(5, 3)));
        assert!(!bounds.contains(Position::new(6, 3)));
        assert!(!bounds.contains(Position::new(5, 4)));
        assert!(!bounds.contains(Position::new(-1, 0)));
        assert!(!bounds.contains(Position::new(0, -1)));
    }

    #[test]
    fn test_cells_row_major() {
        let bounds = GridBounds::new(1, 1);
        let cells: Vec<_> = bounds.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
        assert_eq!(bounds.cell_count(), 4);
    }

    #[test]
    fn test_covering_grows_past_minimum() {
        let bounds = GridBounds::covering(
            GridBounds::new(5, 5),
            [Position::new(9, 1), Position::new(2, 7), Position::new(1, 1)],
        );
        assert_eq!(bounds, GridBounds::new(9, 7));
    }

    #[test]
    fn test_covering_keeps_minimum() {
        let bounds = GridBounds::covering(GridBounds::new(5, 5), [Position::new(1, 1)]);
        assert_eq!(bounds, GridBounds::new(5, 5));
    }
}
