//! Armies: a civilization's units, treasury, and battle log
//!
//! The army is the only owner of its units. Callers receive clones and refer
//! back to units by [`UnitId`], so no outside handle can mutate an army.

use std::fmt;

use serde::Serialize;

use crate::battle::civilization::Civilization;
use crate::battle::resolution::{BattleEngine, BattleOutcome, BattleRecord};
use crate::battle::unit_type::UnitType;
use crate::battle::units::Unit;
use crate::core::config::{config, EconomyConfig};
use crate::core::error::{ArmyError, Result};
use crate::core::types::{Gold, Strength, UnitId};

/// Per-type unit counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitCounts {
    pub pikemen: usize,
    pub archers: usize,
    pub knights: usize,
}

impl UnitCounts {
    pub fn get(&self, unit_type: UnitType) -> usize {
        match unit_type {
            UnitType::Pikeman => self.pikemen,
            UnitType::Archer => self.archers,
            UnitType::Knight => self.knights,
        }
    }

    fn increment(&mut self, unit_type: UnitType) {
        match unit_type {
            UnitType::Pikeman => self.pikemen += 1,
            UnitType::Archer => self.archers += 1,
            UnitType::Knight => self.knights += 1,
        }
    }
}

/// Read-only snapshot of an army for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmySummary {
    pub civilization: Civilization,
    pub gold: Gold,
    pub total_strength: Strength,
    pub unit_count: usize,
    pub unit_counts: UnitCounts,
    pub battles_fought: usize,
}

/// A civilization's army
#[derive(Debug)]
pub struct Army {
    civilization: Civilization,
    gold: Gold,
    units: Vec<Unit>,
    battle_history: Vec<BattleRecord>,
}

impl Army {
    /// Raise an army using the global economy config
    pub fn new(civilization: Civilization) -> Self {
        Self::with_config(civilization, config())
    }

    pub fn with_config(civilization: Civilization, config: &EconomyConfig) -> Self {
        let units = civilization.roster().expand().map(Unit::new).collect();
        Self {
            civilization,
            gold: config.initial_gold,
            units,
            battle_history: Vec::new(),
        }
    }

    pub fn civilization(&self) -> Civilization {
        self.civilization
    }

    pub fn gold(&self) -> Gold {
        self.gold
    }

    /// Copy of the owned units, in collection order
    pub fn units(&self) -> Vec<Unit> {
        self.units.clone()
    }

    /// Copy of a single owned unit
    pub fn unit(&self, unit_id: UnitId) -> Option<Unit> {
        self.units.iter().find(|u| u.id == unit_id).cloned()
    }

    pub fn units_of_type(&self, unit_type: UnitType) -> Vec<Unit> {
        self.units
            .iter()
            .filter(|u| u.unit_type == unit_type)
            .cloned()
            .collect()
    }

    /// Copy of the battle log, oldest first
    pub fn battle_history(&self) -> Vec<BattleRecord> {
        self.battle_history.clone()
    }

    pub fn total_strength(&self) -> Strength {
        self.units
            .iter()
            .fold(0, |total: Strength, u| total.saturating_add(u.total_strength()))
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn unit_counts(&self) -> UnitCounts {
        let mut counts = UnitCounts::default();
        for unit in &self.units {
            counts.increment(unit.unit_type);
        }
        counts
    }

    pub fn count_of(&self, unit_type: UnitType) -> usize {
        self.units.iter().filter(|u| u.unit_type == unit_type).count()
    }

    pub fn summary(&self) -> ArmySummary {
        ArmySummary {
            civilization: self.civilization,
            gold: self.gold,
            total_strength: self.total_strength(),
            unit_count: self.unit_count(),
            unit_counts: self.unit_counts(),
            battles_fought: self.battle_history.len(),
        }
    }

    /// Train one owned unit
    pub fn train_unit(&mut self, unit_id: UnitId) -> Result<()> {
        let index = self.position_of(unit_id)?;
        self.ensure_affordable(self.units[index].training_cost())?;

        let unit = &mut self.units[index];
        let cost = unit.train();
        self.gold -= cost;

        tracing::debug!(
            civilization = %self.civilization,
            unit = %self.units[index],
            gold = self.gold,
            "Trained unit"
        );
        Ok(())
    }

    /// Train every unit of a type, in collection order, while gold lasts
    ///
    /// Returns how many were trained. Having no units of the type is not an
    /// error, and running out of gold part way through is a partial success.
    /// Fails only if not even one unit can be afforded.
    pub fn train_all_units_of_type(&mut self, unit_type: UnitType) -> Result<usize> {
        let targets: Vec<usize> = self
            .units
            .iter()
            .enumerate()
            .filter(|(_, u)| u.unit_type == unit_type)
            .map(|(i, _)| i)
            .collect();

        if targets.is_empty() {
            return Ok(0);
        }

        let cost = unit_type.training_cost();
        self.ensure_affordable(cost)?;

        let mut trained = 0;
        for index in targets {
            if self.gold < cost {
                break;
            }
            self.gold -= self.units[index].train();
            trained += 1;
        }

        tracing::debug!(
            civilization = %self.civilization,
            %unit_type,
            trained,
            gold = self.gold,
            "Trained units by type"
        );
        Ok(trained)
    }

    /// Upgrade an owned unit to its next type
    ///
    /// The replacement keeps the unit's age but starts with no training
    /// bonus, and is appended to the end of the collection.
    pub fn transform_unit(&mut self, unit_id: UnitId) -> Result<Unit> {
        let index = self.position_of(unit_id)?;
        let unit_type = self.units[index].unit_type;
        let (cost, target) = unit_type
            .upgrade_path()
            .ok_or(ArmyError::InvalidTransformation(unit_type))?;
        self.ensure_affordable(cost)?;

        let old = self.units.remove(index);
        let new_unit = old.upgraded(target);
        self.units.push(new_unit.clone());
        self.gold -= cost;

        tracing::debug!(
            civilization = %self.civilization,
            from = %unit_type,
            to = %target,
            gold = self.gold,
            "Transformed unit"
        );
        Ok(new_unit)
    }

    /// Fight `other` using the standard battle rules
    pub fn attack(&mut self, other: &mut Army) -> BattleOutcome {
        BattleEngine::default().resolve(self, other)
    }

    /// Remove up to `count` of the strongest units, returning how many went
    ///
    /// Equal strengths fall in collection order: the earlier unit is removed
    /// first. Survivors keep their relative order.
    pub(crate) fn remove_strongest_units(&mut self, count: usize) -> usize {
        let mut ranked: Vec<(UnitId, Strength)> = self
            .units
            .iter()
            .map(|u| (u.id, u.total_strength()))
            .collect();
        // Stable sort keeps collection order among equals
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let doomed: Vec<UnitId> = ranked.into_iter().take(count).map(|(id, _)| id).collect();
        self.units.retain(|u| !doomed.contains(&u.id));

        if !doomed.is_empty() {
            tracing::debug!(
                civilization = %self.civilization,
                removed = doomed.len(),
                remaining = self.units.len(),
                "Removed strongest units"
            );
        }
        doomed.len()
    }

    pub(crate) fn award_gold(&mut self, amount: Gold) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub(crate) fn record_battle(&mut self, record: BattleRecord) {
        self.battle_history.push(record);
    }

    fn position_of(&self, unit_id: UnitId) -> Result<usize> {
        self.units
            .iter()
            .position(|u| u.id == unit_id)
            .ok_or(ArmyError::UnitNotOwned(unit_id))
    }

    fn ensure_affordable(&self, cost: Gold) -> Result<()> {
        if self.gold < cost {
            return Err(ArmyError::InsufficientGold {
                required: cost,
                available: self.gold,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_gold(&mut self, gold: Gold) {
        self.gold = gold;
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.unit_counts();
        write!(
            f,
            "{} Army: {} {}, {} {}, {} {} (Strength: {}, Gold: {})",
            self.civilization,
            counts.pikemen,
            UnitType::Pikeman.plural(),
            counts.archers,
            UnitType::Archer.plural(),
            counts.knights,
            UnitType::Knight.plural(),
            self.total_strength(),
            self.gold
        )
    }
}
