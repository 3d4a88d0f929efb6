//! Battle system integration tests

use civ_armies::battle::*;
use civ_armies::core::config::EconomyConfig;

fn engine_losing(units_lost_on_defeat: usize, winner_gold_reward: u32) -> BattleEngine {
    BattleEngine::from_config(&EconomyConfig {
        winner_gold_reward,
        units_lost_on_defeat,
        ..EconomyConfig::default()
    })
    .unwrap()
}

#[test]
fn test_stronger_army_wins_gold_and_casualties() {
    let mut byzantine = Army::new(Civilization::Byzantine);
    let mut chinese = Army::new(Civilization::Chinese);
    assert_eq!(byzantine.total_strength(), 405);
    assert_eq!(chinese.total_strength(), 300);

    byzantine.attack(&mut chinese);

    assert_eq!(byzantine.gold(), 1100);
    assert_eq!(chinese.gold(), 1000);
    assert_eq!(chinese.unit_count(), 27);
    assert_eq!(chinese.total_strength(), 260);

    assert_eq!(
        byzantine.battle_history(),
        vec![BattleRecord {
            opponent: Civilization::Chinese,
            result: BattleResult::Win,
            own_strength: 405,
            opponent_strength: 300,
            gold_gained: 100,
            units_lost: 0,
        }]
    );
    assert_eq!(
        chinese.battle_history(),
        vec![BattleRecord {
            opponent: Civilization::Byzantine,
            result: BattleResult::Loss,
            own_strength: 300,
            opponent_strength: 405,
            gold_gained: 0,
            units_lost: 2,
        }]
    );
}

#[test]
fn test_records_reflect_pre_battle_strength() {
    let mut english = Army::new(Civilization::English);
    let mut chinese = Army::new(Civilization::Chinese);

    english.attack(&mut chinese);

    // Chinese dropped to 260 but the record keeps the moment of combat
    let record = &chinese.battle_history()[0];
    assert_eq!(record.own_strength, 300);
    assert_eq!(record.opponent_strength, 350);
    assert_eq!(chinese.total_strength(), 260);
}

#[test]
fn test_equal_armies_tie() {
    let mut first = Army::new(Civilization::English);
    let mut second = Army::new(Civilization::English);

    let outcome = first.attack(&mut second);

    assert!(outcome.is_tie());
    for army in [&first, &second] {
        assert_eq!(army.unit_count(), 29);
        assert_eq!(army.gold(), 1000);
        assert_eq!(army.count_of(UnitType::Knight), 9);
        let history = army.battle_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result, BattleResult::Tie);
        assert_eq!(history[0].own_strength, 350);
        assert_eq!(history[0].opponent_strength, 350);
        assert_eq!(history[0].gold_gained, 0);
        assert_eq!(history[0].units_lost, 1);
    }
}

#[test]
fn test_empty_army_loses_without_casualties() {
    let mut empty = Army::new(Civilization::Chinese);
    let mut english = Army::new(Civilization::English);
    let engine = engine_losing(100, WINNER_GOLD_REWARD);
    // Wipe the Chinese army out first
    engine.resolve(&mut english, &mut empty);
    assert_eq!(empty.unit_count(), 0);

    let outcome = empty.attack(&mut english);

    assert_eq!(outcome.winner, Some(BattleSide::Defender));
    assert_eq!(outcome.attacker_units_lost, 0);
    let last = empty.battle_history().pop().unwrap();
    assert_eq!(last.result, BattleResult::Loss);
    assert_eq!(last.own_strength, 0);
    assert_eq!(last.units_lost, 0);
    assert_eq!(empty.unit_count(), 0);
}

#[test]
fn test_two_empty_armies_tie() {
    let wipe = engine_losing(100, 0);
    let mut first = Army::new(Civilization::Chinese);
    let mut second = Army::new(Civilization::Chinese);
    let mut byzantine = Army::new(Civilization::Byzantine);
    wipe.resolve(&mut byzantine, &mut first);
    wipe.resolve(&mut byzantine, &mut second);

    let outcome = first.attack(&mut second);

    assert!(outcome.is_tie());
    assert_eq!(outcome.attacker_units_lost, 0);
    assert_eq!(outcome.defender_units_lost, 0);
    for army in [&first, &second] {
        let last = army.battle_history().pop().unwrap();
        assert_eq!(last.result, BattleResult::Tie);
        assert_eq!(last.units_lost, 0);
        assert_eq!(army.gold(), 1000);
    }
}

#[test]
fn test_loser_with_single_unit_loses_only_one() {
    let engine = engine_losing(28, 0);
    let mut chinese = Army::new(Civilization::Chinese);
    let mut byzantine = Army::new(Civilization::Byzantine);
    engine.resolve(&mut byzantine, &mut chinese);
    assert_eq!(chinese.unit_count(), 1);

    byzantine.attack(&mut chinese);

    assert_eq!(chinese.unit_count(), 0);
    assert_eq!(chinese.battle_history()[1].units_lost, 1);
}

#[test]
fn test_training_can_turn_a_battle() {
    let mut chinese = Army::new(Civilization::Chinese);
    let mut english = Army::new(Civilization::English);

    // 25 archers at +7 each: 300 + 175 = 475 > 350
    assert_eq!(chinese.train_all_units_of_type(UnitType::Archer).unwrap(), 25);
    assert_eq!(chinese.total_strength(), 475);
    assert_eq!(chinese.gold(), 500);

    let outcome = chinese.attack(&mut english);

    assert_eq!(outcome.winner, Some(BattleSide::Attacker));
    assert_eq!(chinese.gold(), 600);
    assert_eq!(english.unit_count(), 28);
}

#[test]
fn test_history_accumulates_in_order() {
    let mut byzantine = Army::new(Civilization::Byzantine);
    let mut chinese = Army::new(Civilization::Chinese);
    let mut english = Army::new(Civilization::English);

    byzantine.attack(&mut chinese);
    english.attack(&mut chinese);

    let history = chinese.battle_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].opponent, Civilization::Byzantine);
    assert_eq!(history[1].opponent, Civilization::English);
    assert_eq!(history[1].own_strength, 260);
    assert_eq!(chinese.unit_count(), 25);
    assert_eq!(
        history[1].to_string(),
        "Battle vs English: LOSS (260 vs 350) Gold: +0, Units lost: 2"
    );
}

#[test]
fn test_history_copy_is_independent() {
    let mut byzantine = Army::new(Civilization::Byzantine);
    let mut chinese = Army::new(Civilization::Chinese);
    byzantine.attack(&mut chinese);

    let mut copy = byzantine.battle_history();
    copy.clear();

    assert_eq!(byzantine.battle_history().len(), 1);
    assert_eq!(byzantine.battle_history(), byzantine.battle_history());
}
