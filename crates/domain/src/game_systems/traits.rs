//! Game system traits for rules-specific mechanics.
//!
//! These traits define the interface for the calculations and progression
//! tables the resolvers depend on, so the resolvers never hard-code a
//! formula themselves.

use serde::{Deserialize, Serialize};

use crate::entities::{Ability, AbilityScores, SpellSlotTable};

/// Calculation rules that vary per game system.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For D&D 5e: floor((score - 10) / 2)
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate proficiency bonus from total character level.
    ///
    /// For D&D 5e: ((level - 1) / 4) + 2
    fn proficiency_bonus(&self, level: u8) -> i32;

    /// Calculate spell save DC.
    ///
    /// For D&D 5e: 8 + proficiency + casting ability modifier
    fn spell_save_dc(&self, scores: &AbilityScores, ability: Ability, proficiency_bonus: i32)
        -> i32;

    /// Calculate spell attack bonus.
    ///
    /// For D&D 5e: proficiency + casting ability modifier
    fn spell_attack_bonus(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_bonus: i32,
    ) -> i32;

    /// Calculate skill check modifier.
    fn skill_modifier(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_level: ProficiencyLevel,
        proficiency_bonus: i32,
    ) -> i32;

    /// Calculate saving throw modifier.
    fn saving_throw_modifier(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_level: ProficiencyLevel,
        proficiency_bonus: i32,
    ) -> i32 {
        self.skill_modifier(scores, ability, proficiency_level, proficiency_bonus)
    }

    /// Calculate passive perception from the Perception skill modifier.
    fn passive_perception(&self, perception_modifier: i32) -> i32 {
        10 + perception_modifier
    }
}

/// Proficiency level for skills and saves.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    /// Not proficient
    #[default]
    None,
    /// Half proficiency (Jack of All Trades, etc.)
    Half,
    /// Standard proficiency
    Proficient,
    /// Expertise (double proficiency)
    Expert,
}

impl ProficiencyLevel {
    /// Bonus added on top of the ability modifier. Half proficiency rounds down.
    pub fn apply(&self, proficiency_bonus: i32) -> i32 {
        match self {
            ProficiencyLevel::None => 0,
            ProficiencyLevel::Half => proficiency_bonus / 2,
            ProficiencyLevel::Proficient => proficiency_bonus,
            ProficiencyLevel::Expert => proficiency_bonus * 2,
        }
    }
}

/// For systems with spellcasting.
///
/// Slot lookups return `None` when the level has no row in the table,
/// which callers report as a warning and replace with an empty table.
pub trait SpellcastingSystem: Send + Sync {
    /// Get the caster type for a class and its optional subclass.
    fn caster_type(&self, class: &str, subclass: Option<&str>) -> CasterType;

    /// Get the spellcasting ability for a class.
    fn spellcasting_ability(&self, class: &str, subclass: Option<&str>) -> Option<Ability>;

    /// Slots for a lone caster class at its own class level.
    fn single_class_slots(&self, caster_type: CasterType, level: u8) -> Option<SpellSlotTable>;

    /// Slots for the combined multiclass caster level.
    fn multiclass_slots(&self, caster_level: u8) -> Option<SpellSlotTable>;

    /// Pact magic slots for a warlock level.
    fn pact_slots(&self, level: u8) -> Option<SpellSlotTable>;
}

/// Type of spellcaster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasterType {
    /// Full caster (Wizard, Cleric, Druid, Sorcerer, Bard)
    Full,
    /// Half caster (Paladin, Ranger)
    Half,
    /// Half caster rounding up, with slots from level 1 (Artificer)
    Artificer,
    /// Third caster (Eldritch Knight, Arcane Trickster)
    Third,
    /// Pact magic (Warlock)
    Pact,
    /// No spellcasting
    #[default]
    None,
}

impl CasterType {
    /// Get the caster level for multiclassing calculations.
    pub fn effective_caster_levels(&self, class_level: u8) -> u8 {
        match self {
            CasterType::Full => class_level,
            CasterType::Half => class_level / 2,
            CasterType::Artificer => class_level.div_ceil(2),
            CasterType::Third => class_level / 3,
            CasterType::Pact => 0, // Warlock doesn't contribute to multiclass slots
            CasterType::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_level_applies_bonus() {
        assert_eq!(ProficiencyLevel::None.apply(3), 0);
        assert_eq!(ProficiencyLevel::Half.apply(3), 1);
        assert_eq!(ProficiencyLevel::Proficient.apply(3), 3);
        assert_eq!(ProficiencyLevel::Expert.apply(3), 6);
    }

    #[test]
    fn proficiency_levels_order_by_strength() {
        assert!(ProficiencyLevel::Expert > ProficiencyLevel::Proficient);
        assert!(ProficiencyLevel::Proficient > ProficiencyLevel::Half);
        assert!(ProficiencyLevel::Half > ProficiencyLevel::None);
    }

    #[test]
    fn caster_type_effective_levels() {
        assert_eq!(CasterType::Full.effective_caster_levels(5), 5);
        assert_eq!(CasterType::Half.effective_caster_levels(6), 3);
        assert_eq!(CasterType::Half.effective_caster_levels(5), 2);
        assert_eq!(CasterType::Artificer.effective_caster_levels(5), 3);
        assert_eq!(CasterType::Artificer.effective_caster_levels(1), 1);
        assert_eq!(CasterType::Third.effective_caster_levels(9), 3);
        assert_eq!(CasterType::Third.effective_caster_levels(8), 2);
        assert_eq!(CasterType::Pact.effective_caster_levels(10), 0);
        assert_eq!(CasterType::None.effective_caster_levels(10), 0);
    }
}
