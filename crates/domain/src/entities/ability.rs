//! Ability scores: the six abilities and their resolved totals.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the six core abilities.
///
/// The character service keys base scores by a numeric stat id (1..=6) in
/// the order below; modifiers reference abilities by their lowercase slug
/// (e.g. `strength-score`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Map the service's stat id to an ability.
    pub fn from_stat_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Strength),
            2 => Some(Self::Dexterity),
            3 => Some(Self::Constitution),
            4 => Some(Self::Intelligence),
            5 => Some(Self::Wisdom),
            6 => Some(Self::Charisma),
            _ => None,
        }
    }

    pub fn stat_id(self) -> u8 {
        match self {
            Self::Strength => 1,
            Self::Dexterity => 2,
            Self::Constitution => 3,
            Self::Intelligence => 4,
            Self::Wisdom => 5,
            Self::Charisma => 6,
        }
    }

    /// Lowercase identifier used in modifier subtypes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Modifier subtype that adjusts this ability's score (`strength-score`).
    pub fn score_subtype(self) -> String {
        format!("{}-score", self.slug())
    }

    /// Modifier subtype granting this ability's saving throw.
    pub fn saving_throw_subtype(self) -> String {
        format!("{}-saving-throws", self.slug())
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ability::ALL
            .into_iter()
            .find(|a| a.slug() == normalized || a.abbreviation().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

/// Resolved score for one ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityResult {
    pub ability: Ability,
    /// Stored score, or 10 when the record has none.
    pub base: i32,
    /// Sum of every `bonus` modifier for this ability across all sources.
    pub bonus: i32,
    /// Replaces base + bonus entirely when present.
    #[serde(rename = "override")]
    pub override_score: Option<i32>,
    pub total: i32,
    pub modifier: i32,
}

impl AbilityResult {
    /// An ability with no data: score 10, modifier 0.
    pub fn unset(ability: Ability) -> Self {
        Self {
            ability,
            base: 10,
            bonus: 0,
            override_score: None,
            total: 10,
            modifier: 0,
        }
    }
}

/// All six resolved abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    scores: BTreeMap<Ability, AbilityResult>,
}

impl AbilityScores {
    /// Build from resolved entries; any ability not supplied is left unset.
    pub fn from_results(results: impl IntoIterator<Item = AbilityResult>) -> Self {
        let mut scores: BTreeMap<Ability, AbilityResult> = Ability::ALL
            .into_iter()
            .map(|a| (a, AbilityResult::unset(a)))
            .collect();
        for result in results {
            scores.insert(result.ability, result);
        }
        Self { scores }
    }

    pub fn get(&self, ability: Ability) -> AbilityResult {
        self.scores
            .get(&ability)
            .copied()
            .unwrap_or_else(|| AbilityResult::unset(ability))
    }

    pub fn total(&self, ability: Ability) -> i32 {
        self.get(ability).total
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.get(ability).modifier
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityResult> {
        self.scores.values()
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::from_results(std::iter::empty())
    }
}
