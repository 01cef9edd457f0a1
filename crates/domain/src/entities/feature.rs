//! Class features, racial traits and feats as resolved for a character.
//!
//! Features and traits share one shape. Identity is the numeric id assigned
//! by the character service, never the display name: two features named
//! "Spellcasting" from different classes are distinct entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::skip::SkipRecord;

/// How a feature is used at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Always-on effect
    Passive,
    /// Used with an action, bonus action or reaction
    Active,
    /// Limited uses that recharge
    Resource,
    /// Grants or modifies spellcasting
    Spell,
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passive => write!(f, "passive"),
            Self::Active => write!(f, "active"),
            Self::Resource => write!(f, "resource"),
            Self::Spell => write!(f, "spell"),
        }
    }
}

/// Where a feature or trait came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeatureSource {
    Class { name: String },
    Subclass { class_name: String, name: String },
    Race { name: String },
    Subrace { name: String },
    Feat,
}

impl fmt::Display for FeatureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class { name } => write!(f, "{}", name),
            Self::Subclass { class_name, name } => write!(f, "{} ({})", name, class_name),
            Self::Race { name } | Self::Subrace { name } => write!(f, "{}", name),
            Self::Feat => write!(f, "Feat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEntry {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub required_level: Option<u8>,
    pub source: FeatureSource,
    pub category: FeatureCategory,
}

/// Racial traits use the feature shape.
pub type TraitEntry = FeatureEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureResult {
    pub class_features: Vec<FeatureEntry>,
    pub racial_traits: Vec<TraitEntry>,
    pub feats: Vec<FeatureEntry>,
    pub skipped: Vec<SkipRecord>,
}

impl FeatureResult {
    pub fn has_trait_named(&self, name: &str) -> bool {
        self.racial_traits
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name))
    }
}
