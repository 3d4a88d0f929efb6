//! Economy and battle constants - all tunable values in one place
//!
//! Gold and strength are integers. Rewards are additive; nothing is ever
//! subtracted from a loser's treasury.

use crate::core::types::Gold;

// Treasury
pub const INITIAL_GOLD: Gold = 1000;

// Battle outcome
pub const WINNER_GOLD_REWARD: Gold = 100;
pub const UNITS_LOST_ON_DEFEAT: usize = 2;
pub const TIE_UNITS_LOST: usize = 1;
