//! Overcooker - cooperative cooking grid-world with tabular policy learning

pub mod core;
pub mod kitchen;
pub mod policy;
pub mod simulation;
pub mod spatial;
