//! Battle resolution - pure strength comparison
//!
//! The stronger army wins gold and the weaker one loses its strongest units.
//! Equal strength is a tie, costing each side its single strongest unit.
//! Both strengths are read before either army is touched, and every record
//! carries those pre-battle values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::battle::army::Army;
use crate::battle::civilization::Civilization;
use crate::core::config::{config, EconomyConfig};
use crate::core::error::Result;
use crate::core::types::{Gold, Strength};

/// Result of a battle from one army's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Win,
    Loss,
    Tie,
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            BattleResult::Win => "WIN",
            BattleResult::Loss => "LOSS",
            BattleResult::Tie => "TIE",
        };
        f.write_str(tag)
    }
}

/// One entry in an army's battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub opponent: Civilization,
    pub result: BattleResult,
    pub own_strength: Strength,
    pub opponent_strength: Strength,
    pub gold_gained: Gold,
    pub units_lost: usize,
}

impl fmt::Display for BattleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Battle vs {}: {} ({} vs {}) Gold: +{}, Units lost: {}",
            self.opponent,
            self.result,
            self.own_strength,
            self.opponent_strength,
            self.gold_gained,
            self.units_lost
        )
    }
}

/// Which participant of a battle call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleSide {
    Attacker,
    Defender,
}

/// Summary of one resolved battle, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BattleOutcome {
    /// `None` on a tie
    pub winner: Option<BattleSide>,
    pub attacker_strength: Strength,
    pub defender_strength: Strength,
    pub attacker_units_lost: usize,
    pub defender_units_lost: usize,
    pub gold_awarded: Gold,
}

impl BattleOutcome {
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Stateless battle resolver
///
/// Only built from a validated [`EconomyConfig`], so a defeat always costs
/// at least one unit and a tie never costs more than a defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleEngine {
    winner_gold_reward: Gold,
    units_lost_on_defeat: usize,
    tie_units_lost: usize,
}

impl Default for BattleEngine {
    fn default() -> Self {
        // The global config is validated on the way in
        Self::from_valid(config())
    }
}

impl BattleEngine {
    pub fn from_config(config: &EconomyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &EconomyConfig) -> Self {
        Self {
            winner_gold_reward: config.winner_gold_reward,
            units_lost_on_defeat: config.units_lost_on_defeat,
            tie_units_lost: config.tie_units_lost,
        }
    }

    pub fn winner_gold_reward(&self) -> Gold {
        self.winner_gold_reward
    }

    pub fn units_lost_on_defeat(&self) -> usize {
        self.units_lost_on_defeat
    }

    pub fn tie_units_lost(&self) -> usize {
        self.tie_units_lost
    }

    /// Resolve a battle between two armies, mutating both
    ///
    /// Never fails: empty or zero-strength armies simply lose (or tie each
    /// other) without casualties to give up.
    pub fn resolve(&self, attacker: &mut Army, defender: &mut Army) -> BattleOutcome {
        let attacker_strength = attacker.total_strength();
        let defender_strength = defender.total_strength();

        let outcome = if attacker_strength > defender_strength {
            let lost = self.handle_victory(attacker, defender, attacker_strength, defender_strength);
            BattleOutcome {
                winner: Some(BattleSide::Attacker),
                attacker_strength,
                defender_strength,
                attacker_units_lost: 0,
                defender_units_lost: lost,
                gold_awarded: self.winner_gold_reward,
            }
        } else if defender_strength > attacker_strength {
            let lost = self.handle_victory(defender, attacker, defender_strength, attacker_strength);
            BattleOutcome {
                winner: Some(BattleSide::Defender),
                attacker_strength,
                defender_strength,
                attacker_units_lost: lost,
                defender_units_lost: 0,
                gold_awarded: self.winner_gold_reward,
            }
        } else {
            let (attacker_lost, defender_lost) = self.handle_tie(attacker, defender, attacker_strength);
            BattleOutcome {
                winner: None,
                attacker_strength,
                defender_strength,
                attacker_units_lost: attacker_lost,
                defender_units_lost: defender_lost,
                gold_awarded: 0,
            }
        };

        tracing::info!(
            attacker = %attacker.civilization(),
            defender = %defender.civilization(),
            attacker_strength,
            defender_strength,
            winner = ?outcome.winner,
            "Battle resolved"
        );
        outcome
    }

    /// Returns the number of units the loser gave up
    fn handle_victory(
        &self,
        winner: &mut Army,
        loser: &mut Army,
        winner_strength: Strength,
        loser_strength: Strength,
    ) -> usize {
        winner.award_gold(self.winner_gold_reward);
        let units_lost = loser.remove_strongest_units(self.units_lost_on_defeat);

        winner.record_battle(BattleRecord {
            opponent: loser.civilization(),
            result: BattleResult::Win,
            own_strength: winner_strength,
            opponent_strength: loser_strength,
            gold_gained: self.winner_gold_reward,
            units_lost: 0,
        });
        loser.record_battle(BattleRecord {
            opponent: winner.civilization(),
            result: BattleResult::Loss,
            own_strength: loser_strength,
            opponent_strength: winner_strength,
            gold_gained: 0,
            units_lost,
        });

        units_lost
    }

    fn handle_tie(&self, first: &mut Army, second: &mut Army, strength: Strength) -> (usize, usize) {
        let first_lost = first.remove_strongest_units(self.tie_units_lost);
        let second_lost = second.remove_strongest_units(self.tie_units_lost);
        let (first_civ, second_civ) = (first.civilization(), second.civilization());

        for (army, opponent, units_lost) in [
            (first, second_civ, first_lost),
            (second, first_civ, second_lost),
        ] {
            army.record_battle(BattleRecord {
                opponent,
                result: BattleResult::Tie,
                own_strength: strength,
                opponent_strength: strength,
                gold_gained: 0,
                units_lost,
            });
        }

        (first_lost, second_lost)
    }
}

/// Resolve a battle with the engine built from the global config
pub fn resolve_battle(attacker: &mut Army, defender: &mut Army) -> BattleOutcome {
    BattleEngine::default().resolve(attacker, defender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::unit_type::UnitType;
    use crate::core::error::ArmyError;

    #[test]
    fn test_record_display() {
        let record = BattleRecord {
            opponent: Civilization::Byzantine,
            result: BattleResult::Loss,
            own_strength: 200,
            opponent_strength: 300,
            gold_gained: 0,
            units_lost: 2,
        };
        assert_eq!(
            record.to_string(),
            "Battle vs Byzantine: LOSS (200 vs 300) Gold: +0, Units lost: 2"
        );
    }

    #[test]
    fn test_attacker_victory() {
        let mut byzantine = Army::new(Civilization::Byzantine);
        let mut chinese = Army::new(Civilization::Chinese);

        let outcome = BattleEngine::default().resolve(&mut byzantine, &mut chinese);

        assert_eq!(outcome.winner, Some(BattleSide::Attacker));
        assert_eq!(outcome.defender_units_lost, 2);
        assert_eq!(byzantine.gold(), 1100);
        assert_eq!(chinese.gold(), 1000);
        assert_eq!(chinese.unit_count(), 27);
        // The two knights were the strongest
        assert_eq!(chinese.count_of(UnitType::Knight), 0);
    }

    #[test]
    fn test_defender_victory() {
        let mut chinese = Army::new(Civilization::Chinese);
        let mut byzantine = Army::new(Civilization::Byzantine);

        let outcome = resolve_battle(&mut chinese, &mut byzantine);

        assert_eq!(outcome.winner, Some(BattleSide::Defender));
        assert_eq!(outcome.attacker_units_lost, 2);
        assert_eq!(byzantine.gold(), 1100);
        assert_eq!(chinese.battle_history()[0].result, BattleResult::Loss);
        assert_eq!(byzantine.battle_history()[0].result, BattleResult::Win);
    }

    #[test]
    fn test_tie_costs_one_unit_each() {
        let mut first = Army::new(Civilization::English);
        let mut second = Army::new(Civilization::English);

        let outcome = resolve_battle(&mut first, &mut second);

        assert!(outcome.is_tie());
        assert_eq!(outcome.gold_awarded, 0);
        assert_eq!(first.unit_count(), 29);
        assert_eq!(second.unit_count(), 29);
        assert_eq!(first.gold(), 1000);
        assert_eq!(second.gold(), 1000);
    }

    #[test]
    fn test_custom_engine_rules() {
        let engine = BattleEngine::from_config(&EconomyConfig {
            winner_gold_reward: 250,
            units_lost_on_defeat: 5,
            ..EconomyConfig::default()
        })
        .unwrap();
        let mut byzantine = Army::new(Civilization::Byzantine);
        let mut english = Army::new(Civilization::English);

        let outcome = engine.resolve(&mut byzantine, &mut english);

        assert_eq!(outcome.gold_awarded, 250);
        assert_eq!(byzantine.gold(), 1250);
        assert_eq!(english.unit_count(), 25);
        assert_eq!(english.battle_history()[0].units_lost, 5);
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let no_defeat_losses = EconomyConfig {
            units_lost_on_defeat: 0,
            ..EconomyConfig::default()
        };
        let costly_tie = EconomyConfig {
            tie_units_lost: 5,
            ..EconomyConfig::default()
        };

        assert!(matches!(
            BattleEngine::from_config(&no_defeat_losses),
            Err(ArmyError::Config(_))
        ));
        assert!(matches!(
            BattleEngine::from_config(&costly_tie),
            Err(ArmyError::Config(_))
        ));
    }

    #[test]
    fn test_default_engine_uses_standard_rules() {
        let engine = BattleEngine::default();
        assert_eq!(engine.winner_gold_reward(), 100);
        assert_eq!(engine.units_lost_on_defeat(), 2);
        assert_eq!(engine.tie_units_lost(), 1);
    }
}
