//! Individual combat units
//!
//! A unit knows its own type, training bonus, and age. It never knows which
//! army owns it; gold bookkeeping belongs to the army.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::battle::unit_type::UnitType;
use crate::core::types::{Gold, Strength, UnitId};

/// A single combat unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub unit_type: UnitType,
    bonus_strength: Strength,
    age: u32,
}

impl Unit {
    pub fn new(unit_type: UnitType) -> Self {
        Self::with_age(unit_type, 0)
    }

    pub fn with_age(unit_type: UnitType, age: u32) -> Self {
        Self {
            id: UnitId::new(),
            unit_type,
            bonus_strength: 0,
            age,
        }
    }

    pub fn base_strength(&self) -> Strength {
        self.unit_type.base_strength()
    }

    /// Strength accumulated through training
    pub fn bonus_strength(&self) -> Strength {
        self.bonus_strength
    }

    pub fn total_strength(&self) -> Strength {
        self.base_strength().saturating_add(self.bonus_strength)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn training_cost(&self) -> Gold {
        self.unit_type.training_cost()
    }

    pub fn transform_cost(&self) -> Option<Gold> {
        self.unit_type.transform_cost()
    }

    /// Apply one round of training and return its cost
    ///
    /// Always succeeds. The caller is responsible for checking and
    /// deducting gold.
    pub fn train(&mut self) -> Gold {
        self.bonus_strength = self
            .bonus_strength
            .saturating_add(self.unit_type.training_gain());
        self.training_cost()
    }

    #[cfg(test)]
    pub(crate) fn with_bonus(unit_type: UnitType, bonus_strength: Strength) -> Unit {
        Unit {
            bonus_strength,
            ..Unit::new(unit_type)
        }
    }

    /// Build the upgraded unit, keeping age and dropping training
    pub(crate) fn upgraded(&self, target: UnitType) -> Unit {
        Unit::with_age(target, self.age)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(strength={}, age={})",
            self.unit_type,
            self.total_strength(),
            self.age
        )
    }
}
