//! Economy configuration with documented constants
//!
//! The defaults reproduce the standard rules. A TOML file can override any
//! subset of the fields; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    INITIAL_GOLD, TIE_UNITS_LOST, UNITS_LOST_ON_DEFEAT, WINNER_GOLD_REWARD,
};
use crate::core::error::{ArmyError, Result};
use crate::core::types::Gold;

/// Configuration for the army economy and battle rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Gold every newly raised army starts with
    pub initial_gold: Gold,

    /// Gold awarded to the winner of a battle
    ///
    /// The loser never pays; the reward is minted, not transferred.
    pub winner_gold_reward: Gold,

    /// Number of strongest units the loser of a battle gives up
    pub units_lost_on_defeat: usize,

    /// Number of strongest units each side gives up on a tie
    pub tie_units_lost: usize,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            initial_gold: INITIAL_GOLD,
            winner_gold_reward: WINNER_GOLD_REWARD,
            units_lost_on_defeat: UNITS_LOST_ON_DEFEAT,
            tie_units_lost: TIE_UNITS_LOST,
        }
    }
}

impl EconomyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EconomyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.units_lost_on_defeat == 0 {
            return Err(ArmyError::Config(
                "units_lost_on_defeat must be at least 1".into(),
            ));
        }

        // A tie must never cost more than a defeat
        if self.tie_units_lost > self.units_lost_on_defeat {
            return Err(ArmyError::Config(format!(
                "tie_units_lost ({}) should be <= units_lost_on_defeat ({})",
                self.tie_units_lost, self.units_lost_on_defeat
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EconomyConfig> = OnceLock::new();

/// Get the global economy config (initializes with defaults if not set)
pub fn config() -> &'static EconomyConfig {
    CONFIG.get_or_init(EconomyConfig::default)
}

/// Set the global economy config (can only be called once)
///
/// Returns Err if the config is invalid or a config was already set.
pub fn set_config(config: EconomyConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ArmyError::Config("economy config already set".into()))
}
