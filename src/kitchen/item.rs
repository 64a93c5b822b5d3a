//! Floor items and the ingredient chain

use serde::{Deserialize, Serialize};

use crate::core::types::Position;
use crate::spatial::Located;

/// Kind of item; one onion becomes one soup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    RawOnion,
    ChoppedOnion,
    Soup,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::RawOnion, ItemKind::ChoppedOnion, ItemKind::Soup];

    /// One-character display tag
    pub fn tag(self) -> char {
        match self {
            ItemKind::RawOnion => 'o',
            ItemKind::ChoppedOnion => 'p',
            ItemKind::Soup => 's',
        }
    }

    pub fn from_tag(tag: char) -> Option<ItemKind> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemKind::RawOnion => "raw onion",
            ItemKind::ChoppedOnion => "chopped onion",
            ItemKind::Soup => "soup",
        };
        f.write_str(name)
    }
}

/// An item lying on the grid
///
/// Items held by an agent live in that agent's inventory instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Position,
}

impl Item {
    pub fn new(kind: ItemKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl Located for Item {
    fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ItemKind::from_tag('x'), None);
    }
}
