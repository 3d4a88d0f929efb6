//! Civ Armies - deterministic army economy and battle engine

pub mod battle;
pub mod core;
