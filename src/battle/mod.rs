//! Army economy and battle system
//!
//! Armies train and upgrade their units with gold, then settle battles by a
//! straight comparison of total strength. Nothing is random: the same armies
//! always produce the same outcome.

pub mod army;
pub mod civilization;
pub mod constants;
pub mod resolution;
pub mod unit_type;
pub mod units;

// Re-exports for convenient access
pub use army::{Army, ArmySummary, UnitCounts};
pub use civilization::{Civilization, CivilizationRoster};
pub use constants::*;
pub use resolution::{
    resolve_battle, BattleEngine, BattleOutcome, BattleRecord, BattleResult, BattleSide,
};
pub use unit_type::{UnitProperties, UnitType};
pub use units::Unit;
