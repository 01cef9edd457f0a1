//! Languages a character speaks and language picks still outstanding.

use serde::{Deserialize, Serialize};

use super::modifier::ModifierSource;
use super::skip::SkipRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub id: String,
    pub name: String,
    pub subtype: String,
    pub source: ModifierSource,
    pub is_granted: bool,
}

/// A "choose a language" slot the player has not filled yet.
///
/// Kept apart from granted languages: a choice never counts as a known
/// language, even when its subtype names one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChoice {
    pub id: String,
    pub subtype: String,
    pub label: String,
    pub source: ModifierSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResult {
    pub languages: Vec<LanguageEntry>,
    pub choices: Vec<LanguageChoice>,
    pub skipped: Vec<SkipRecord>,
}

impl LanguageResult {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }
}
