//! Spellcasting resources derived from class levels.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use crate::game_systems::CasterType;

/// Highest spell level.
pub const MAX_SPELL_LEVEL: u8 = 9;

/// Slot counts for spell levels 1-9.
///
/// Always fixed-size; a level with no slots holds 0. The regular and pact
/// magic tables are separate instances and are never combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellSlotTable {
    slots: [u8; MAX_SPELL_LEVEL as usize],
}

impl SpellSlotTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from per-level counts, starting at spell level 1.
    ///
    /// Counts beyond level 9 are ignored.
    pub fn from_counts(counts: &[u8]) -> Self {
        let mut slots = [0u8; MAX_SPELL_LEVEL as usize];
        for (slot, &count) in slots.iter_mut().zip(counts) {
            *slot = count;
        }
        Self { slots }
    }

    /// A table holding `count` slots of a single spell level (pact magic).
    pub fn single_level(spell_level: u8, count: u8) -> Self {
        let mut table = Self::empty();
        if (1..=MAX_SPELL_LEVEL).contains(&spell_level) {
            table.slots[(spell_level - 1) as usize] = count;
        }
        table
    }

    /// Slots available at a spell level; 0 outside 1..=9.
    pub fn get(&self, spell_level: u8) -> u8 {
        if (1..=MAX_SPELL_LEVEL).contains(&spell_level) {
            self.slots[(spell_level - 1) as usize]
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&s| s == 0)
    }

    pub fn total(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// Non-empty levels as `(spell_level, count)`.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| ((i + 1) as u8, count))
    }

    pub fn as_array(&self) -> &[u8; MAX_SPELL_LEVEL as usize] {
        &self.slots
    }
}

/// Spellcasting classification of one class entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasterClassInfo {
    pub class_name: String,
    pub subclass_name: Option<String>,
    pub level: u8,
    pub caster_type: CasterType,
    /// Levels this class adds to the shared multiclass caster level.
    pub caster_level_contribution: u8,
    pub is_pact_magic: bool,
    pub spellcasting_ability: Option<Ability>,
    pub spell_save_dc: Option<i32>,
    pub spell_attack_bonus: Option<i32>,
}

impl CasterClassInfo {
    /// Whether the class draws on the shared slot pool.
    pub fn is_shared_pool_caster(&self) -> bool {
        !self.is_pact_magic && self.caster_type != CasterType::None
    }
}

/// Which progression produced the regular slot table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotProgression {
    /// No class contributes to the shared pool
    NonCaster,
    /// Exactly one caster class, using its own table at its own level
    SingleClass { class_name: String },
    /// Several caster classes, using the multiclass table
    Multiclass,
}

/// Complete spellcasting picture for a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellcastingResult {
    pub classes: Vec<CasterClassInfo>,
    /// Sum of every non-pact contribution.
    pub caster_level: u8,
    pub progression: SlotProgression,
    pub regular_slots: SpellSlotTable,
    pub pact_level: u8,
    pub pact_slots: SpellSlotTable,
}

impl Default for SpellcastingResult {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            caster_level: 0,
            progression: SlotProgression::NonCaster,
            regular_slots: SpellSlotTable::empty(),
            pact_level: 0,
            pact_slots: SpellSlotTable::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_fills_from_first_level() {
        let table = SpellSlotTable::from_counts(&[4, 3, 2]);
        assert_eq!(table.get(1), 4);
        assert_eq!(table.get(2), 3);
        assert_eq!(table.get(3), 2);
        assert_eq!(table.get(4), 0);
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn out_of_range_levels_read_as_zero() {
        let table = SpellSlotTable::from_counts(&[1; 12]);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(10), 0);
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn single_level_table() {
        let table = SpellSlotTable::single_level(2, 2);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(2, 2)]);
        assert!(SpellSlotTable::single_level(0, 3).is_empty());
    }

    #[test]
    fn serializes_as_fixed_array() {
        let table = SpellSlotTable::from_counts(&[2]);
        let json = serde_json::to_string(&table).expect("serializable");
        assert_eq!(json, "[2,0,0,0,0,0,0,0,0]");
    }
}
