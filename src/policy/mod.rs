//! Tabular policy learning
//!
//! One action distribution per grid cell, nudged online by observed reward.
//! This is a policy-gradient-flavored heuristic without a value function.

pub mod learning;
pub mod map;
pub mod table;

pub use learning::LearningConfig;
pub use map::PolicyMap;
pub use table::{Policy, SUM_TOLERANCE};
