//! D&D 5th Edition game system implementation.
//!
//! Implements the calculation rules and spellcasting progressions the
//! resolution pipeline needs for D&D 5e.

use super::traits::{CalculationEngine, CasterType, ProficiencyLevel, SpellcastingSystem};
use crate::entities::{Ability, AbilityScores, SpellSlotTable};

/// Highest character or class level with a table row.
pub const MAX_LEVEL: u8 = 20;

/// A skill with its modifier subtype and governing ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub slug: &'static str,
    pub name: &'static str,
    pub ability: Ability,
}

const fn skill(slug: &'static str, name: &'static str, ability: Ability) -> SkillDefinition {
    SkillDefinition {
        slug,
        name,
        ability,
    }
}

/// The eighteen skills, alphabetical.
pub const SKILLS: [SkillDefinition; 18] = [
    skill("acrobatics", "Acrobatics", Ability::Dexterity),
    skill("animal-handling", "Animal Handling", Ability::Wisdom),
    skill("arcana", "Arcana", Ability::Intelligence),
    skill("athletics", "Athletics", Ability::Strength),
    skill("deception", "Deception", Ability::Charisma),
    skill("history", "History", Ability::Intelligence),
    skill("insight", "Insight", Ability::Wisdom),
    skill("intimidation", "Intimidation", Ability::Charisma),
    skill("investigation", "Investigation", Ability::Intelligence),
    skill("medicine", "Medicine", Ability::Wisdom),
    skill("nature", "Nature", Ability::Intelligence),
    skill("perception", "Perception", Ability::Wisdom),
    skill("performance", "Performance", Ability::Charisma),
    skill("persuasion", "Persuasion", Ability::Charisma),
    skill("religion", "Religion", Ability::Intelligence),
    skill("sleight-of-hand", "Sleight of Hand", Ability::Dexterity),
    skill("stealth", "Stealth", Ability::Dexterity),
    skill("survival", "Survival", Ability::Wisdom),
];

/// D&D 5th Edition game system.
#[derive(Debug, Clone, Copy)]
pub struct Dnd5eSystem;

impl Default for Dnd5eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }

    pub fn skills(&self) -> &'static [SkillDefinition] {
        &SKILLS
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        // D&D uses floor division, Rust's / rounds toward zero
        let diff = score - 10;
        if diff >= 0 {
            diff / 2
        } else {
            (diff - 1) / 2
        }
    }

    fn proficiency_bonus(&self, level: u8) -> i32 {
        let level = i32::from(level.clamp(1, MAX_LEVEL));
        ((level - 1) / 4) + 2
    }

    fn spell_save_dc(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_bonus: i32,
    ) -> i32 {
        8 + proficiency_bonus + scores.modifier(ability)
    }

    fn spell_attack_bonus(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_bonus: i32,
    ) -> i32 {
        proficiency_bonus + scores.modifier(ability)
    }

    fn skill_modifier(
        &self,
        scores: &AbilityScores,
        ability: Ability,
        proficiency_level: ProficiencyLevel,
        proficiency_bonus: i32,
    ) -> i32 {
        scores.modifier(ability) + proficiency_level.apply(proficiency_bonus)
    }
}

impl SpellcastingSystem for Dnd5eSystem {
    fn caster_type(&self, class: &str, subclass: Option<&str>) -> CasterType {
        let subclass = subclass.map(|s| s.trim().to_lowercase());
        match class.trim().to_lowercase().as_str() {
            "wizard" | "cleric" | "druid" | "sorcerer" | "bard" => CasterType::Full,
            "paladin" | "ranger" => CasterType::Half,
            "artificer" => CasterType::Artificer,
            "warlock" => CasterType::Pact,
            "fighter" if subclass.as_deref() == Some("eldritch knight") => CasterType::Third,
            "rogue" if subclass.as_deref() == Some("arcane trickster") => CasterType::Third,
            _ => CasterType::None,
        }
    }

    fn spellcasting_ability(&self, class: &str, subclass: Option<&str>) -> Option<Ability> {
        match self.caster_type(class, subclass) {
            CasterType::None => return None,
            CasterType::Third => return Some(Ability::Intelligence),
            _ => {}
        }
        match class.trim().to_lowercase().as_str() {
            "wizard" | "artificer" => Some(Ability::Intelligence),
            "cleric" | "druid" | "ranger" => Some(Ability::Wisdom),
            "sorcerer" | "bard" | "paladin" | "warlock" => Some(Ability::Charisma),
            _ => None,
        }
    }

    fn single_class_slots(&self, caster_type: CasterType, level: u8) -> Option<SpellSlotTable> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return None;
        }
        let table = match caster_type {
            CasterType::Full => FULL_CASTER_SLOTS,
            CasterType::Half => HALF_CASTER_SLOTS,
            CasterType::Artificer => ARTIFICER_SLOTS,
            CasterType::Third => THIRD_CASTER_SLOTS,
            CasterType::Pact | CasterType::None => return Some(SpellSlotTable::empty()),
        };
        Some(slots_at(table, level))
    }

    fn multiclass_slots(&self, caster_level: u8) -> Option<SpellSlotTable> {
        match caster_level {
            0 => Some(SpellSlotTable::empty()),
            level if level <= MAX_LEVEL => Some(slots_at(FULL_CASTER_SLOTS, level)),
            _ => None,
        }
    }

    fn pact_slots(&self, level: u8) -> Option<SpellSlotTable> {
        warlock_slots(level).map(|(count, slot_level)| SpellSlotTable::single_level(slot_level, count))
    }
}

// Spell slot progression tables

type SlotRows = &'static [(u8, &'static [u8])];

/// Also the multiclass spellcaster table.
const FULL_CASTER_SLOTS: SlotRows = &[
    (1, &[2]),
    (2, &[3]),
    (3, &[4, 2]),
    (4, &[4, 3]),
    (5, &[4, 3, 2]),
    (6, &[4, 3, 3]),
    (7, &[4, 3, 3, 1]),
    (8, &[4, 3, 3, 2]),
    (9, &[4, 3, 3, 3, 1]),
    (10, &[4, 3, 3, 3, 2]),
    (11, &[4, 3, 3, 3, 2, 1]),
    (12, &[4, 3, 3, 3, 2, 1]),
    (13, &[4, 3, 3, 3, 2, 1, 1]),
    (14, &[4, 3, 3, 3, 2, 1, 1]),
    (15, &[4, 3, 3, 3, 2, 1, 1, 1]),
    (16, &[4, 3, 3, 3, 2, 1, 1, 1]),
    (17, &[4, 3, 3, 3, 2, 1, 1, 1, 1]),
    (18, &[4, 3, 3, 3, 3, 1, 1, 1, 1]),
    (19, &[4, 3, 3, 3, 3, 2, 1, 1, 1]),
    (20, &[4, 3, 3, 3, 3, 2, 2, 1, 1]),
];

// Half casters get slots at half rate (starting at level 2)
const HALF_CASTER_SLOTS: SlotRows = &[
    (2, &[2]),
    (3, &[3]),
    (4, &[3]),
    (5, &[4, 2]),
    (6, &[4, 2]),
    (7, &[4, 3]),
    (8, &[4, 3]),
    (9, &[4, 3, 2]),
    (10, &[4, 3, 2]),
    (11, &[4, 3, 3]),
    (12, &[4, 3, 3]),
    (13, &[4, 3, 3, 1]),
    (14, &[4, 3, 3, 1]),
    (15, &[4, 3, 3, 2]),
    (16, &[4, 3, 3, 2]),
    (17, &[4, 3, 3, 3, 1]),
    (18, &[4, 3, 3, 3, 1]),
    (19, &[4, 3, 3, 3, 2]),
    (20, &[4, 3, 3, 3, 2]),
];

// Artificers round up and cast from level 1
const ARTIFICER_SLOTS: SlotRows = &[
    (1, &[2]),
    (2, &[2]),
    (3, &[3]),
    (4, &[3]),
    (5, &[4, 2]),
    (6, &[4, 2]),
    (7, &[4, 3]),
    (8, &[4, 3]),
    (9, &[4, 3, 2]),
    (10, &[4, 3, 2]),
    (11, &[4, 3, 3]),
    (12, &[4, 3, 3]),
    (13, &[4, 3, 3, 1]),
    (14, &[4, 3, 3, 1]),
    (15, &[4, 3, 3, 2]),
    (16, &[4, 3, 3, 2]),
    (17, &[4, 3, 3, 3, 1]),
    (18, &[4, 3, 3, 3, 1]),
    (19, &[4, 3, 3, 3, 2]),
    (20, &[4, 3, 3, 3, 2]),
];

// Third casters (Eldritch Knight, Arcane Trickster)
const THIRD_CASTER_SLOTS: SlotRows = &[
    (3, &[2]),
    (4, &[3]),
    (5, &[3]),
    (6, &[3]),
    (7, &[4, 2]),
    (8, &[4, 2]),
    (9, &[4, 2]),
    (10, &[4, 3]),
    (11, &[4, 3]),
    (12, &[4, 3]),
    (13, &[4, 3, 2]),
    (14, &[4, 3, 2]),
    (15, &[4, 3, 2]),
    (16, &[4, 3, 3]),
    (17, &[4, 3, 3]),
    (18, &[4, 3, 3]),
    (19, &[4, 3, 3, 1]),
    (20, &[4, 3, 3, 1]),
];

/// Row for `level`; a level before the first row has no slots yet.
fn slots_at(table: SlotRows, level: u8) -> SpellSlotTable {
    table
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, s)| SpellSlotTable::from_counts(s))
        .unwrap_or_default()
}

/// Warlock pact magic as `(slot count, slot level)`.
fn warlock_slots(level: u8) -> Option<(u8, u8)> {
    // Fewer slots but higher level, all of one level
    match level {
        1 => Some((1, 1)),
        2 => Some((2, 1)),
        3..=4 => Some((2, 2)),
        5..=6 => Some((2, 3)),
        7..=8 => Some((2, 4)),
        9..=10 => Some((2, 5)),
        11..=16 => Some((3, 5)),
        17..=20 => Some((4, 5)),
        _ => None,
    }
}
