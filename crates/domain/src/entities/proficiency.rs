//! Weapon, armor and tool proficiencies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::skip::SkipRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyCategory {
    Weapon,
    Armor,
    Tool,
}

impl fmt::Display for ProficiencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// A proficiency ready for display. `source_key` is unique in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyEntry {
    pub source_key: String,
    pub display_name: String,
    pub category: ProficiencyCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyResult {
    pub entries: Vec<ProficiencyEntry>,
    pub skipped: Vec<SkipRecord>,
}

impl ProficiencyResult {
    pub fn contains(&self, source_key: &str) -> bool {
        self.entries.iter().any(|e| e.source_key == source_key)
    }

    pub fn in_category(
        &self,
        category: ProficiencyCategory,
    ) -> impl Iterator<Item = &ProficiencyEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}
