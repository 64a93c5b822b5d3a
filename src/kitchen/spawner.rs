//! Training item spawner
//!
//! Resets the floor and scatters one item of every kind on random free cells,
//! so agents keep meeting every stage of the recipe while they learn.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{Position, Tick};
use crate::kitchen::item::{Item, ItemKind};
use crate::kitchen::world::Kitchen;
use crate::spatial::is_occupied;

/// Placement order of spawned items
const SPAWN_ORDER: [ItemKind; 3] = [ItemKind::Soup, ItemKind::RawOnion, ItemKind::ChoppedOnion];

/// When the driver should call the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSchedule {
    pub enabled: bool,
    /// Spawn on ticks divisible by this
    pub every: u64,
    /// No spawning from this tick on
    pub until: Tick,
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self {
            enabled: true,
            every: 15,
            until: 1000,
        }
    }
}

impl SpawnSchedule {
    pub fn is_due(&self, tick: Tick) -> bool {
        self.enabled && self.every > 0 && tick < self.until && tick % self.every == 0
    }
}

impl Kitchen {
    /// Cells holding no agent and no station
    ///
    /// Floor items are ignored because the spawner replaces them all.
    pub fn free_cells(&self) -> Vec<Position> {
        self.bounds
            .cells()
            .filter(|&pos| !is_occupied(&self.agents, pos) && !is_occupied(&self.stations, pos))
            .collect()
    }

    /// Replace all floor items with one soup, one raw onion and one chopped onion
    ///
    /// Returns false and leaves the floor untouched when fewer than three free
    /// cells exist.
    pub fn spawn_training_items<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let mut free = self.free_cells();
        if free.len() < SPAWN_ORDER.len() {
            warn!(free = free.len(), "not enough empty cells to spawn training items");
            return false;
        }

        free.shuffle(rng);

        self.items.clear();
        for (kind, pos) in SPAWN_ORDER.iter().zip(free.iter()) {
            self.items.push(Item::new(*kind, *pos));
        }

        debug!(
            free = free.len(),
            placed = ?self.items.iter().map(|i| (i.kind.tag(), i.position)).collect::<Vec<_>>(),
            "spawned training items"
        );
        true
    }
}
