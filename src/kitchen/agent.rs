//! Chefs moving on the grid

use serde::{Deserialize, Serialize};

use crate::core::types::Position;
use crate::kitchen::item::ItemKind;
use crate::spatial::Located;

/// A chef with a single-slot inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub position: Position,
    /// At most one carried item
    pub inventory: Option<ItemKind>,
}

impl Agent {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            inventory: None,
        }
    }
}

impl Located for Agent {
    fn position(&self) -> Position {
        self.position
    }
}
