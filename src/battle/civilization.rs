//! Civilizations and their starting rosters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::battle::unit_type::UnitType;

/// A playable civilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civilization {
    Chinese,
    English,
    Byzantine,
}

/// Starting unit composition of a civilization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilizationRoster {
    pub pikemen: usize,
    pub archers: usize,
    pub knights: usize,
}

impl CivilizationRoster {
    pub fn count_of(&self, unit_type: UnitType) -> usize {
        match unit_type {
            UnitType::Pikeman => self.pikemen,
            UnitType::Archer => self.archers,
            UnitType::Knight => self.knights,
        }
    }

    pub fn total_units(&self) -> usize {
        self.pikemen + self.archers + self.knights
    }

    /// Unit types in creation order: pikemen, then archers, then knights
    pub fn expand(&self) -> impl Iterator<Item = UnitType> + '_ {
        UnitType::ALL
            .into_iter()
            .flat_map(move |unit_type| std::iter::repeat(unit_type).take(self.count_of(unit_type)))
    }
}

impl Civilization {
    pub const ALL: [Civilization; 3] = [
        Civilization::Chinese,
        Civilization::English,
        Civilization::Byzantine,
    ];

    pub fn roster(&self) -> CivilizationRoster {
        match self {
            Civilization::Chinese => CivilizationRoster {
                pikemen: 2,
                archers: 25,
                knights: 2,
            },
            Civilization::English => CivilizationRoster {
                pikemen: 10,
                archers: 10,
                knights: 10,
            },
            Civilization::Byzantine => CivilizationRoster {
                pikemen: 5,
                archers: 8,
                knights: 15,
            },
        }
    }
}

impl fmt::Display for Civilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Civilization::Chinese => "Chinese",
            Civilization::English => "English",
            Civilization::Byzantine => "Byzantine",
        };
        f.write_str(name)
    }
}

impl FromStr for Civilization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Civilization::ALL
            .into_iter()
            .find(|civ| civ.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown civilization: {}", s))
    }
}
