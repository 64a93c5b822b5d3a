//! Fixed kitchen stations
//!
//! A station's name is its one-character type tag followed by an instance
//! number, e.g. `C1` for the first chopping board.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Position;
use crate::spatial::Located;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    /// Box of onions
    Source,
    /// Chopping board
    Chop,
    /// Stove
    Cook,
    /// Serving hatch
    Deliver,
}

impl StationKind {
    pub const ALL: [StationKind; 4] = [
        StationKind::Source,
        StationKind::Chop,
        StationKind::Cook,
        StationKind::Deliver,
    ];

    pub fn tag(self) -> char {
        match self {
            StationKind::Source => 'O',
            StationKind::Chop => 'C',
            StationKind::Cook => 'S',
            StationKind::Deliver => 'D',
        }
    }

    pub fn from_tag(tag: char) -> Option<StationKind> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub kind: StationKind,
    pub position: Position,
}

impl Station {
    pub fn new(kind: StationKind, instance: u32, position: Position) -> Self {
        Self {
            name: format!("{}{}", kind.tag(), instance),
            kind,
            position,
        }
    }

    /// Build a station from its tag-encoded name
    pub fn from_name(name: &str, position: Position) -> Result<Self> {
        let kind = name
            .chars()
            .next()
            .and_then(StationKind::from_tag)
            .ok_or_else(|| SimError::InvalidScenario(format!("unknown station tag in {:?}", name)))?;

        Ok(Self {
            name: name.to_string(),
            kind,
            position,
        })
    }
}

impl Located for Station {
    fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_encodes_tag_and_instance() {
        let station = Station::new(StationKind::Cook, 2, Position::new(1, 1));
        assert_eq!(station.name, "S2");
    }

    #[test]
    fn test_from_name() {
        let station = Station::from_name("D1", Position::new(5, 5)).expect("valid tag");
        assert_eq!(station.kind, StationKind::Deliver);
        assert_eq!(station.name, "D1");
    }

    #[test]
    fn test_from_name_rejects_unknown_tag() {
        assert!(Station::from_name("X1", Position::new(0, 0)).is_err());
        assert!(Station::from_name("", Position::new(0, 0)).is_err());
    }
}
