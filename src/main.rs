//! Civ Armies - Demonstration
//!
//! Raises one army per civilization, trains and upgrades units, fights a
//! few battles, and prints the resulting state and battle logs.

use std::path::PathBuf;

use civ_armies::battle::{Army, ArmySummary, Civilization, Unit, UnitType};
use civ_armies::core::config::{set_config, EconomyConfig};
use civ_armies::core::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Army economy demonstration
#[derive(Parser, Debug)]
#[command(name = "civ-armies")]
#[command(about = "Train, upgrade, and battle civilization armies")]
struct Args {
    /// Economy config (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("civ_armies=info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = EconomyConfig::load(path)?;
        match set_config(config) {
            Ok(()) => tracing::info!("Loaded economy config from {}", path.display()),
            Err(e) => tracing::warn!("Ignoring {}: {}", path.display(), e),
        }
    }

    let text = args.format == OutputFormat::Text;

    let (mut chinese, mut english, mut byzantine) = demonstrate_army_creation(text);
    demonstrate_training(&mut chinese, text)?;
    demonstrate_transformation(&mut english, text)?;
    demonstrate_battles(&mut chinese, &mut english, &mut byzantine, text);

    if text {
        demonstrate_battle_history(&[&chinese, &english, &byzantine]);
        demonstrate_error_handling();
        print_separator("DEMONSTRATION COMPLETE");
    } else {
        let summaries: Vec<ArmySummary> = [&chinese, &english, &byzantine]
            .iter()
            .map(|army| army.summary())
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }

    Ok(())
}

fn print_separator(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!(" {}", title);
    println!("{}", "=".repeat(50));
}

fn display_army_status(army: &Army, title: &str) {
    let counts = army.unit_counts();
    println!("\n{}", title);
    println!("  {}", army);
    println!("  Unit Details:");
    println!("    - Pikemen: {}", counts.pikemen);
    println!("    - Archers: {}", counts.archers);
    println!("    - Knights: {}", counts.knights);
    println!("  Total Strength: {}", army.total_strength());
    println!("  Gold: {}", army.gold());
    println!("  Battles Fought: {}", army.battle_history().len());
}

fn demonstrate_army_creation(text: bool) -> (Army, Army, Army) {
    let chinese = Army::new(Civilization::Chinese);
    let english = Army::new(Civilization::English);
    let byzantine = Army::new(Civilization::Byzantine);

    if text {
        print_separator("ARMY CREATION");
        for army in [&chinese, &english, &byzantine] {
            display_army_status(army, &format!("{} Army", army.civilization()));
        }
    }

    (chinese, english, byzantine)
}

fn demonstrate_training(army: &mut Army, text: bool) -> Result<()> {
    if text {
        print_separator("TRAINING DEMONSTRATION");
        display_army_status(army, "Before Training");
    }

    if let Some(pikeman) = army.units_of_type(UnitType::Pikeman).into_iter().next() {
        army.train_unit(pikeman.id)?;
        if let (true, Some(trained)) = (text, army.unit(pikeman.id)) {
            println!(
                "\nTrained first pikeman: strength {} -> {}, army gold {}",
                pikeman.total_strength(),
                trained.total_strength(),
                army.gold()
            );
        }
    }

    let archers = army.count_of(UnitType::Archer);
    if archers > 0 {
        let trained = army.train_all_units_of_type(UnitType::Archer)?;
        if text {
            println!(
                "\nTrained {} of {} archers, army gold {}",
                trained,
                archers,
                army.gold()
            );
        }
    }

    if text {
        display_army_status(army, "After Training");
    }
    Ok(())
}

fn demonstrate_transformation(army: &mut Army, text: bool) -> Result<()> {
    if text {
        print_separator("TRANSFORMATION DEMONSTRATION");
        display_army_status(army, "Before Transformations");
    }

    if let Some(pikeman) = army.units_of_type(UnitType::Pikeman).into_iter().next() {
        let archer = army.transform_unit(pikeman.id)?;
        if text {
            println!("\nTransformed pikeman into {}, gold {}", archer, army.gold());
        }
    }

    // Keep at least one archer
    let archers = army.units_of_type(UnitType::Archer);
    if archers.len() > 1 {
        let knight = army.transform_unit(archers[0].id)?;
        if text {
            println!("Transformed archer into {}, gold {}", knight, army.gold());
        }
    }

    if let Some(knight) = army.units_of_type(UnitType::Knight).into_iter().next() {
        match army.transform_unit(knight.id) {
            Ok(unit) => tracing::warn!("Knight unexpectedly transformed into {}", unit),
            Err(e) if text => println!("Attempted knight transformation: {}", e),
            Err(_) => {}
        }
    }

    if text {
        display_army_status(army, "After Transformations");
    }
    Ok(())
}

fn demonstrate_battles(chinese: &mut Army, english: &mut Army, byzantine: &mut Army, text: bool) {
    if text {
        print_separator("BATTLE DEMONSTRATION");
    }

    run_battle(byzantine, chinese, text);
    run_battle(english, chinese, text);

    let mut first = Army::new(Civilization::English);
    let mut second = Army::new(Civilization::English);
    let outcome = first.attack(&mut second);
    if text {
        println!(
            "\nBATTLE: identical armies at strength {}: tie = {}, losses {} / {}",
            outcome.attacker_strength,
            outcome.is_tie(),
            outcome.attacker_units_lost,
            outcome.defender_units_lost
        );
    }
}

fn run_battle(attacker: &mut Army, defender: &mut Army, text: bool) {
    let outcome = attacker.attack(defender);
    if text {
        println!(
            "\nBATTLE: {} ({}) vs {} ({})",
            attacker.civilization(),
            outcome.attacker_strength,
            defender.civilization(),
            outcome.defender_strength
        );
        if let Some(record) = attacker.battle_history().last() {
            println!("  {}", record);
        }
    }
}

fn demonstrate_battle_history(armies: &[&Army]) {
    print_separator("BATTLE HISTORY");

    for army in armies {
        let history = army.battle_history();
        if history.is_empty() {
            println!("\n{} Army: No battles fought", army.civilization());
            continue;
        }
        println!("\n{} Army Battle History:", army.civilization());
        for (i, record) in history.iter().enumerate() {
            println!("  Battle {}: {}", i + 1, record);
        }
    }
}

fn demonstrate_error_handling() {
    print_separator("ERROR HANDLING DEMONSTRATION");

    let mut army = Army::new(Civilization::Chinese);

    if let Some(knight) = army.units_of_type(UnitType::Knight).into_iter().next() {
        if let Err(e) = army.transform_unit(knight.id) {
            println!("1. Invalid transformation: {}", e);
        }
    }

    let stranger = Unit::new(UnitType::Pikeman);
    if let Err(e) = army.train_unit(stranger.id) {
        println!("2. Training a unit from another army: {}", e);
    }

    while army.gold() >= UnitType::Knight.training_cost() {
        if army.train_all_units_of_type(UnitType::Knight).is_err() {
            break;
        }
    }
    if let Err(e) = army.train_all_units_of_type(UnitType::Knight) {
        println!("3. Training with an empty treasury: {}", e);
    }
}
