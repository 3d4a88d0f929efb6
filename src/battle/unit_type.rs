//! Unit types and their fixed properties
//!
//! The variant set is closed: every cost and strength comes from one table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Gold, Strength};

/// Type of military unit, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitType {
    Pikeman,
    Archer,
    Knight,
}

/// Fixed properties for a unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitProperties {
    pub base_strength: Strength,
    pub training_cost: Gold,
    pub training_gain: Strength,
    /// Cost to upgrade, `None` for the terminal type
    pub transform_cost: Option<Gold>,
    pub transform_target: Option<UnitType>,
}

impl UnitType {
    pub const ALL: [UnitType; 3] = [UnitType::Pikeman, UnitType::Archer, UnitType::Knight];

    /// Get the fixed properties for this unit type
    pub fn properties(&self) -> UnitProperties {
        match self {
            UnitType::Pikeman => UnitProperties {
                base_strength: 5,
                training_cost: 10,
                training_gain: 3,
                transform_cost: Some(30),
                transform_target: Some(UnitType::Archer),
            },

            UnitType::Archer => UnitProperties {
                base_strength: 10,
                training_cost: 20,
                training_gain: 7,
                transform_cost: Some(40),
                transform_target: Some(UnitType::Knight),
            },

            UnitType::Knight => UnitProperties {
                base_strength: 20,
                training_cost: 30,
                training_gain: 10,
                transform_cost: None,
                transform_target: None,
            },
        }
    }

    pub fn base_strength(&self) -> Strength {
        self.properties().base_strength
    }

    pub fn training_cost(&self) -> Gold {
        self.properties().training_cost
    }

    pub fn training_gain(&self) -> Strength {
        self.properties().training_gain
    }

    pub fn transform_cost(&self) -> Option<Gold> {
        self.properties().transform_cost
    }

    pub fn transform_target(&self) -> Option<UnitType> {
        self.properties().transform_target
    }

    /// Cost and target of the upgrade, if this type has one
    pub fn upgrade_path(&self) -> Option<(Gold, UnitType)> {
        let props = self.properties();
        props.transform_cost.zip(props.transform_target)
    }

    /// Has no upgrade path
    pub fn is_terminal(&self) -> bool {
        self.upgrade_path().is_none()
    }

    /// Plural name used in army summaries
    pub fn plural(&self) -> &'static str {
        match self {
            UnitType::Pikeman => "Pikemen",
            UnitType::Archer => "Archers",
            UnitType::Knight => "Knights",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitType::Pikeman => "Pikeman",
            UnitType::Archer => "Archer",
            UnitType::Knight => "Knight",
        };
        f.write_str(name)
    }
}
