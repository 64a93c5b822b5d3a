//! Grid bounds and position queries

pub mod grid;
pub mod lookup;

pub use grid::GridBounds;
pub use lookup::{first_at, index_at, is_occupied, Located};
