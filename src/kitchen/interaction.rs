//! What happens when an agent interacts with its cell
//!
//! The only state is the agent's inventory; the station type acts as the
//! transition function. A station on the cell always takes precedence over
//! an item lying on the same cell. Dropping a held item is not possible.

use crate::kitchen::item::ItemKind;
use crate::kitchen::rewards::EventKind;
use crate::kitchen::station::StationKind;

/// Result of a single interact request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OnionGet,
    OnionChop,
    OnionCook,
    SoupDeliver,
    PickedUp(ItemKind),
    /// Precondition unmet; nothing changes
    Rejected,
}

impl Outcome {
    pub fn event(self) -> Option<EventKind> {
        match self {
            Outcome::OnionGet => Some(EventKind::OnionGet),
            Outcome::OnionChop => Some(EventKind::OnionChop),
            Outcome::OnionCook => Some(EventKind::OnionCook),
            Outcome::SoupDeliver => Some(EventKind::SoupDeliver),
            Outcome::PickedUp(_) | Outcome::Rejected => None,
        }
    }

    pub fn is_rejected(self) -> bool {
        self == Outcome::Rejected
    }
}

/// Effect of an interaction on the agent and the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub outcome: Outcome,
    /// Inventory after the interaction
    pub inventory: Option<ItemKind>,
    /// The floor item on the cell moves into the inventory
    pub takes_floor_item: bool,
}

impl Transition {
    fn rejected(held: Option<ItemKind>) -> Self {
        Self {
            outcome: Outcome::Rejected,
            inventory: held,
            takes_floor_item: false,
        }
    }

    fn to(outcome: Outcome, inventory: Option<ItemKind>) -> Self {
        Self {
            outcome,
            inventory,
            takes_floor_item: false,
        }
    }
}

/// Resolve an interaction from what is on the cell and what the agent holds
pub fn resolve(
    station: Option<StationKind>,
    floor_item: Option<ItemKind>,
    held: Option<ItemKind>,
) -> Transition {
    if let Some(kind) = station {
        return match (kind, held) {
            (StationKind::Source, None) => Transition::to(Outcome::OnionGet, Some(ItemKind::RawOnion)),
            (StationKind::Chop, Some(ItemKind::RawOnion)) => {
                Transition::to(Outcome::OnionChop, Some(ItemKind::ChoppedOnion))
            }
            (StationKind::Cook, Some(ItemKind::ChoppedOnion)) => {
                Transition::to(Outcome::OnionCook, Some(ItemKind::Soup))
            }
            (StationKind::Deliver, Some(ItemKind::Soup)) => Transition::to(Outcome::SoupDeliver, None),
            _ => Transition::rejected(held),
        };
    }

    match (floor_item, held) {
        (Some(item), None) => Transition {
            outcome: Outcome::PickedUp(item),
            inventory: Some(item),
            takes_floor_item: true,
        },
        _ => Transition::rejected(held),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_chain() {
        let t = resolve(Some(StationKind::Source), None, None);
        assert_eq!(t.outcome, Outcome::OnionGet);
        assert_eq!(t.inventory, Some(ItemKind::RawOnion));

        let t = resolve(Some(StationKind::Chop), None, t.inventory);
        assert_eq!(t.outcome, Outcome::OnionChop);
        assert_eq!(t.inventory, Some(ItemKind::ChoppedOnion));

        let t = resolve(Some(StationKind::Cook), None, t.inventory);
        assert_eq!(t.outcome, Outcome::OnionCook);
        assert_eq!(t.inventory, Some(ItemKind::Soup));

        let t = resolve(Some(StationKind::Deliver), None, t.inventory);
        assert_eq!(t.outcome, Outcome::SoupDeliver);
        assert_eq!(t.inventory, None);
    }

    #[test]
    fn test_unmet_preconditions_keep_inventory() {
        let cases = [
            (StationKind::Source, Some(ItemKind::Soup)),
            (StationKind::Chop, None),
            (StationKind::Chop, Some(ItemKind::Soup)),
            (StationKind::Cook, Some(ItemKind::RawOnion)),
            (StationKind::Deliver, Some(ItemKind::ChoppedOnion)),
            (StationKind::Deliver, None),
        ];
        for (station, held) in cases {
            let t = resolve(Some(station), None, held);
            assert!(t.outcome.is_rejected(), "{:?} with {:?}", station, held);
            assert_eq!(t.inventory, held);
            assert!(!t.takes_floor_item);
        }
    }

    #[test]
    fn test_station_beats_floor_item() {
        let t = resolve(Some(StationKind::Chop), Some(ItemKind::Soup), None);
        assert!(t.outcome.is_rejected());
        assert!(!t.takes_floor_item);
    }

    #[test]
    fn test_pickup_when_empty_handed() {
        let t = resolve(None, Some(ItemKind::ChoppedOnion), None);
        assert_eq!(t.outcome, Outcome::PickedUp(ItemKind::ChoppedOnion));
        assert_eq!(t.inventory, Some(ItemKind::ChoppedOnion));
        assert!(t.takes_floor_item);
    }

    #[test]
    fn test_no_drop_and_no_swap() {
        // Holding something on an empty cell: dropping is disabled
        let t = resolve(None, None, Some(ItemKind::Soup));
        assert!(t.outcome.is_rejected());
        assert_eq!(t.inventory, Some(ItemKind::Soup));

        // Holding something on a cell with an item: no swap
        let t = resolve(None, Some(ItemKind::RawOnion), Some(ItemKind::Soup));
        assert!(t.outcome.is_rejected());
        assert!(!t.takes_floor_item);
    }

    #[test]
    fn test_empty_cell_empty_hands() {
        let t = resolve(None, None, None);
        assert!(t.outcome.is_rejected());
        assert_eq!(t.inventory, None);
    }

    #[test]
    fn test_only_recipe_steps_are_events() {
        assert_eq!(Outcome::OnionGet.event(), Some(EventKind::OnionGet));
        assert_eq!(Outcome::SoupDeliver.event(), Some(EventKind::SoupDeliver));
        assert_eq!(Outcome::PickedUp(ItemKind::RawOnion).event(), None);
        assert_eq!(Outcome::Rejected.event(), None);
    }
}
