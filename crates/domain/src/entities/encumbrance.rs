//! Encumbrance tiers and their penalties.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ability::Ability;

/// Carrying-weight bands, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncumbranceLevel {
    Unencumbered,
    Encumbered,
    HeavilyEncumbered,
    Overloaded,
}

impl fmt::Display for EncumbranceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unencumbered => write!(f, "unencumbered"),
            Self::Encumbered => write!(f, "encumbered"),
            Self::HeavilyEncumbered => write!(f, "heavily_encumbered"),
            Self::Overloaded => write!(f, "overloaded"),
        }
    }
}

/// Effect of an encumbrance tier on walking speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpeedPenalty {
    None,
    /// Speed reduced by this many feet
    Reduced { feet: u32 },
    /// Too much weight to move
    Immobile,
}

impl SpeedPenalty {
    /// Feet of speed lost; `None` when movement is prevented outright.
    pub fn feet(&self) -> Option<u32> {
        match self {
            Self::None => Some(0),
            Self::Reduced { feet } => Some(*feet),
            Self::Immobile => None,
        }
    }
}

/// Upper weight bound of each tier for an effective strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarryingCapacity {
    pub unencumbered_max: f64,
    pub encumbered_max: f64,
    /// Also the maximum carrying capacity.
    pub heavily_encumbered_max: f64,
    pub push_drag_lift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncumbranceResult {
    pub total_weight: f64,
    pub effective_strength: i32,
    pub powerful_build: bool,
    pub carrying_capacity_tiers: CarryingCapacity,
    pub encumbrance_level: EncumbranceLevel,
    pub speed_penalty: SpeedPenalty,
    pub disadvantage_on_checks: bool,
    /// Abilities whose checks, attacks and saves suffer disadvantage.
    pub disadvantaged_abilities: Vec<Ability>,
}

impl Default for EncumbranceResult {
    fn default() -> Self {
        Self {
            total_weight: 0.0,
            effective_strength: 10,
            powerful_build: false,
            carrying_capacity_tiers: CarryingCapacity {
                unencumbered_max: 50.0,
                encumbered_max: 100.0,
                heavily_encumbered_max: 150.0,
                push_drag_lift: 300.0,
            },
            encumbrance_level: EncumbranceLevel::Unencumbered,
            speed_penalty: SpeedPenalty::None,
            disadvantage_on_checks: false,
            disadvantaged_abilities: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_weight() {
        assert!(EncumbranceLevel::Unencumbered < EncumbranceLevel::Encumbered);
        assert!(EncumbranceLevel::Encumbered < EncumbranceLevel::HeavilyEncumbered);
        assert!(EncumbranceLevel::HeavilyEncumbered < EncumbranceLevel::Overloaded);
    }

    #[test]
    fn speed_penalty_feet() {
        assert_eq!(SpeedPenalty::None.feet(), Some(0));
        assert_eq!(SpeedPenalty::Reduced { feet: 20 }.feet(), Some(20));
        assert_eq!(SpeedPenalty::Immobile.feet(), None);
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&EncumbranceLevel::HeavilyEncumbered).expect("serializable");
        assert_eq!(json, "\"heavily_encumbered\"");
    }
}
