//! Reward values and event accounting
//!
//! Every interaction outcome maps to a scalar reward; successful steps of the
//! recipe chain also bump a named event counter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kitchen::interaction::Outcome;

/// Point values for each outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Picking up a floor item
    pub pickup: f32,
    /// Taking an onion from the source
    pub onion_get: f32,
    pub onion_chop: f32,
    pub onion_cook: f32,
    pub deliver_soup: f32,
    /// Blocked move or interaction with an unmet precondition
    pub invalid_action: f32,
    /// Default for any tick without a successful interaction
    pub stalling: f32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            pickup: 0.1,
            onion_get: 0.2,
            onion_chop: 0.5,
            onion_cook: 0.7,
            deliver_soup: 1.0,
            invalid_action: -0.1,
            stalling: -0.1,
        }
    }
}

impl RewardTable {
    pub fn reward_for(&self, outcome: Outcome) -> f32 {
        match outcome {
            Outcome::OnionGet => self.onion_get,
            Outcome::OnionChop => self.onion_chop,
            Outcome::OnionCook => self.onion_cook,
            Outcome::SoupDeliver => self.deliver_soup,
            Outcome::PickedUp(_) => self.pickup,
            Outcome::Rejected => self.invalid_action,
        }
    }

    pub fn largest_magnitude(&self) -> f32 {
        [
            self.pickup,
            self.onion_get,
            self.onion_chop,
            self.onion_cook,
            self.deliver_soup,
            self.invalid_action,
            self.stalling,
        ]
        .iter()
        .fold(0.0_f32, |acc, r| acc.max(r.abs()))
    }
}

/// Counted recipe milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    OnionGet,
    OnionChop,
    OnionCook,
    SoupDeliver,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::OnionGet,
        EventKind::OnionChop,
        EventKind::OnionCook,
        EventKind::SoupDeliver,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::OnionGet => "onion_get",
            EventKind::OnionChop => "onion_chop",
            EventKind::OnionCook => "onion_cook",
            EventKind::SoupDeliver => "soup_deliver",
        }
    }

    pub fn from_name(name: &str) -> Option<EventKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// Occurrence counts for the lifetime of one kitchen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounters {
    counts: BTreeMap<EventKind, u64>,
}

impl EventCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: EventKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn get(&self, kind: EventKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Look up a counter by its event name, e.g. `"onion_chop"`
    pub fn get_by_name(&self, name: &str) -> u64 {
        EventKind::from_name(name).map_or(0, |kind| self.get(kind))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Non-zero counters in event order
    pub fn iter(&self) -> impl Iterator<Item = (EventKind, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}
