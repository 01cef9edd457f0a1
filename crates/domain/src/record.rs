//! Type definitions for the character-building service's JSON record.
//!
//! These types mirror the service's character export. They are deserialized
//! once per resolution and only ever read afterwards; no resolver mutates
//! them. Fields the pipeline does not consume are intentionally not modeled.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Root structure of a character export.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: CharacterId,
    #[serde(default)]
    pub name: Option<String>,
    /// Base ability scores keyed by stat id 1..=6.
    #[serde(default)]
    pub stats: Vec<StatValue>,
    /// Pre-aggregated bonuses. Never used for totals; bonuses are re-summed
    /// from `modifiers` instead.
    #[serde(default)]
    pub bonus_stats: Vec<StatValue>,
    #[serde(default)]
    pub override_stats: Vec<StatValue>,
    #[serde(default)]
    pub modifiers: ModifierSources,
    /// `None` when the export carries no class list at all.
    #[serde(default)]
    pub classes: Option<Vec<ClassRecord>>,
    #[serde(default)]
    pub race: Option<RaceRecord>,
    #[serde(default)]
    pub feats: Vec<FeatRecord>,
    #[serde(default)]
    pub background: Option<BackgroundRecord>,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
    #[serde(default)]
    pub currencies: Currencies,
    #[serde(default)]
    pub traits: Option<PersonalityRecord>,
    #[serde(default)]
    pub notes: Option<NotesRecord>,
}

/// One ability score slot. `value` is null when unset.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct StatValue {
    pub id: u8,
    #[serde(default)]
    pub value: Option<i32>,
}

/// Modifier lists grouped by the part of the character that granted them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModifierSources {
    #[serde(default)]
    pub race: Vec<RawModifier>,
    #[serde(default)]
    pub class: Vec<RawModifier>,
    #[serde(default)]
    pub background: Vec<RawModifier>,
    #[serde(default)]
    pub feat: Vec<RawModifier>,
    #[serde(default)]
    pub item: Vec<RawModifier>,
}

/// A single modifier as emitted by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModifier {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub modifier_type: String,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub fixed_value: Option<i32>,
    #[serde(default)]
    pub entity_type_id: Option<i64>,
    #[serde(default)]
    pub friendly_subtype_name: Option<String>,
    #[serde(default = "granted_by_default")]
    pub is_granted: bool,
}

fn granted_by_default() -> bool {
    true
}

/// A class the character has levels in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub level: u8,
    pub definition: ClassDefinition,
    #[serde(default)]
    pub subclass_definition: Option<ClassDefinition>,
    #[serde(default)]
    pub is_starting_class: bool,
}

/// Class or subclass definition with its feature list.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub class_features: Vec<FeatureRecord>,
}

/// A class or subclass feature.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_level: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    pub full_name: String,
    #[serde(default)]
    pub base_race_name: Option<String>,
    #[serde(default)]
    pub racial_traits: Vec<TraitRecord>,
    #[serde(default)]
    pub subrace_definition: Option<SubraceRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubraceRecord {
    pub full_name: String,
    #[serde(default)]
    pub racial_traits: Vec<TraitRecord>,
}

/// Racial traits and feats wrap their payload in a `definition` object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraitRecord {
    pub definition: TraitDefinition,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraitDefinition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatRecord {
    pub definition: TraitDefinition,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackgroundRecord {
    #[serde(default)]
    pub definition: Option<BackgroundDefinition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackgroundDefinition {
    pub name: String,
}

/// One entry of the flat inventory list.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    #[serde(default = "single_quantity")]
    pub quantity: u32,
    /// The character id for top-level items, otherwise the owning container's item id.
    pub container_entity_id: i64,
    #[serde(default)]
    pub equipped: bool,
    /// Missing when the service could not resolve the item definition.
    #[serde(default)]
    pub definition: Option<ItemDefinition>,
}

fn single_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub name: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub is_container: bool,
    /// Scale applied to contents when this item is a container. Zero for
    /// extradimensional storage.
    #[serde(default)]
    pub weight_multiplier: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Currencies {
    #[serde(default)]
    pub cp: u32,
    #[serde(default)]
    pub sp: u32,
    #[serde(default)]
    pub ep: u32,
    #[serde(default)]
    pub gp: u32,
    #[serde(default)]
    pub pp: u32,
}

impl Currencies {
    /// Total number of coins regardless of denomination.
    pub fn coin_count(&self) -> u64 {
        [self.cp, self.sp, self.ep, self.gp, self.pp]
            .iter()
            .map(|&c| u64::from(c))
            .sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityRecord {
    #[serde(default)]
    pub personality_traits: Option<String>,
    #[serde(default)]
    pub ideals: Option<String>,
    #[serde(default)]
    pub bonds: Option<String>,
    #[serde(default)]
    pub flaws: Option<String>,
    #[serde(default)]
    pub appearance: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotesRecord {
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub allies: Option<String>,
    #[serde(default)]
    pub organizations: Option<String>,
    #[serde(default)]
    pub other_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_deserializes_with_defaults() {
        let json = r#"{"id": 7, "classes": []}"#;
        let record: CharacterRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id, CharacterId::new(7));
        assert!(record.stats.is_empty());
        assert!(record.modifiers.race.is_empty());
        assert_eq!(record.classes.map(|c| c.len()), Some(0));
        assert_eq!(record.currencies.coin_count(), 0);
    }

    #[test]
    fn modifiers_default_to_granted() {
        let json = r#"{"type": "language", "subType": "elvish"}"#;
        let modifier: RawModifier = serde_json::from_str(json).expect("valid modifier");
        assert!(modifier.is_granted);
        assert_eq!(modifier.fixed_value, None);
    }

    #[test]
    fn inventory_quantity_defaults_to_one() {
        let json = r#"{"id": 1, "containerEntityId": 7, "definition": {"name": "Rope"}}"#;
        let item: InventoryRecord = serde_json::from_str(json).expect("valid item");
        assert_eq!(item.quantity, 1);
        assert!(!item.definition.map(|d| d.is_container).unwrap_or(true));
    }

    #[test]
    fn coin_count_sums_denominations() {
        let currencies = Currencies {
            cp: 10,
            sp: 20,
            ep: 0,
            gp: 15,
            pp: 5,
        };
        assert_eq!(currencies.coin_count(), 50);
    }
}
