//! The resolved character handed to serializers.
//!
//! A `ResolvedCharacter` is assembled once by the conversion pipeline and is
//! read-only afterwards: fields are private and only exposed through
//! accessors. Every list in it is already deduplicated and every numeric
//! field carries a value, so serializers never re-run resolution logic.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ability::AbilityScores;
use super::defenses::Defenses;
use super::encumbrance::EncumbranceResult;
use super::feature::FeatureResult;
use super::inventory::InventoryResult;
use super::language::LanguageResult;
use super::proficiency::ProficiencyResult;
use super::skills::SkillSheet;
use super::spellcasting::SpellcastingResult;
use crate::ids::{CharacterId, ResolutionId};
use crate::record::Currencies;

/// Named stages of one conversion run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStep {
    ValidateRecord,
    IndexModifiers,
    Abilities,
    Spellcasting,
    Proficiencies,
    SavingThrowsAndSkills,
    Features,
    Languages,
    Defenses,
    Inventory,
    Encumbrance,
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValidateRecord => "validate_record",
            Self::IndexModifiers => "index_modifiers",
            Self::Abilities => "abilities",
            Self::Spellcasting => "spellcasting",
            Self::Proficiencies => "proficiencies",
            Self::SavingThrowsAndSkills => "saving_throws_and_skills",
            Self::Features => "features",
            Self::Languages => "languages",
            Self::Defenses => "defenses",
            Self::Inventory => "inventory",
            Self::Encumbrance => "encumbrance",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    CompletedWithWarnings,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step: ResolutionStep,
    pub status: StepStatus,
    pub issue_count: usize,
}

/// A warning or recoverable error raised by one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineMessage {
    pub step: ResolutionStep,
    pub message: String,
}

impl fmt::Display for PipelineMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.step, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingMetadata {
    pub run_id: ResolutionId,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
    pub warnings: Vec<PipelineMessage>,
    /// Recoverable errors; each was replaced by a safe default.
    pub errors: Vec<PipelineMessage>,
}

impl ProcessingMetadata {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    pub fn step(&self, step: ResolutionStep) -> Option<&StepRecord> {
        self.steps.iter().find(|s| s.step == step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub name: String,
    pub subclass: Option<String>,
    pub level: u8,
    pub is_starting_class: bool,
}

/// Free-text character background, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub background: Option<String>,
    pub personality_traits: Option<String>,
    pub ideals: Option<String>,
    pub bonds: Option<String>,
    pub flaws: Option<String>,
    pub appearance: Option<String>,
    pub backstory: Option<String>,
    pub allies: Option<String>,
    pub organizations: Option<String>,
    pub other_notes: Option<String>,
}

/// Everything the pipeline resolves, before it is sealed.
///
/// The conversion pipeline fills this in step by step; steps that fail
/// leave the default in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParts {
    pub id: CharacterId,
    pub name: String,
    pub race: Option<String>,
    pub subrace: Option<String>,
    pub classes: Vec<ClassSummary>,
    pub total_level: u8,
    pub proficiency_bonus: i32,
    pub abilities: AbilityScores,
    pub skills: SkillSheet,
    pub spellcasting: SpellcastingResult,
    pub proficiencies: ProficiencyResult,
    pub features: FeatureResult,
    pub languages: LanguageResult,
    pub defenses: Defenses,
    pub inventory: InventoryResult,
    pub currencies: Currencies,
    pub encumbrance: EncumbranceResult,
    pub biography: Biography,
}

impl ResolvedParts {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            race: None,
            subrace: None,
            classes: Vec::new(),
            total_level: 0,
            proficiency_bonus: 2,
            abilities: AbilityScores::default(),
            skills: SkillSheet::default(),
            spellcasting: SpellcastingResult::default(),
            proficiencies: ProficiencyResult::default(),
            features: FeatureResult::default(),
            languages: LanguageResult::default(),
            defenses: Defenses::default(),
            inventory: InventoryResult::default(),
            currencies: Currencies::default(),
            encumbrance: EncumbranceResult::default(),
            biography: Biography::default(),
        }
    }
}

/// The single artifact handed to serializers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCharacter {
    #[serde(flatten)]
    parts: ResolvedParts,
    metadata: ProcessingMetadata,
}

impl ResolvedCharacter {
    pub fn assemble(parts: ResolvedParts, metadata: ProcessingMetadata) -> Self {
        Self { parts, metadata }
    }

    pub fn id(&self) -> CharacterId {
        self.parts.id
    }

    pub fn name(&self) -> &str {
        &self.parts.name
    }

    pub fn race(&self) -> Option<&str> {
        self.parts.race.as_deref()
    }

    pub fn subrace(&self) -> Option<&str> {
        self.parts.subrace.as_deref()
    }

    pub fn classes(&self) -> &[ClassSummary] {
        &self.parts.classes
    }

    pub fn total_level(&self) -> u8 {
        self.parts.total_level
    }

    pub fn proficiency_bonus(&self) -> i32 {
        self.parts.proficiency_bonus
    }

    pub fn abilities(&self) -> &AbilityScores {
        &self.parts.abilities
    }

    pub fn skills(&self) -> &SkillSheet {
        &self.parts.skills
    }

    pub fn spellcasting(&self) -> &SpellcastingResult {
        &self.parts.spellcasting
    }

    pub fn proficiencies(&self) -> &ProficiencyResult {
        &self.parts.proficiencies
    }

    pub fn features(&self) -> &FeatureResult {
        &self.parts.features
    }

    pub fn languages(&self) -> &LanguageResult {
        &self.parts.languages
    }

    pub fn defenses(&self) -> &Defenses {
        &self.parts.defenses
    }

    pub fn inventory(&self) -> &InventoryResult {
        &self.parts.inventory
    }

    pub fn currencies(&self) -> &Currencies {
        &self.parts.currencies
    }

    pub fn encumbrance(&self) -> &EncumbranceResult {
        &self.parts.encumbrance
    }

    pub fn biography(&self) -> &Biography {
        &self.parts.biography
    }

    pub fn metadata(&self) -> &ProcessingMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metadata() -> ProcessingMetadata {
        let at = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).single().unwrap_or_default();
        ProcessingMetadata {
            run_id: ResolutionId::new(),
            started_at: at,
            completed_at: at,
            steps: vec![StepRecord {
                step: ResolutionStep::Abilities,
                status: StepStatus::Succeeded,
                issue_count: 0,
            }],
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn assembled_character_exposes_parts() {
        let parts = ResolvedParts::new(CharacterId::new(7), "Vex");
        let resolved = ResolvedCharacter::assemble(parts, metadata());
        assert_eq!(resolved.id(), CharacterId::new(7));
        assert_eq!(resolved.name(), "Vex");
        assert_eq!(resolved.proficiency_bonus(), 2);
        assert!(resolved.metadata().is_clean());
        assert!(resolved.metadata().step(ResolutionStep::Abilities).is_some());
    }

    #[test]
    fn serializes_parts_flat_with_metadata() {
        let parts = ResolvedParts::new(CharacterId::new(7), "Vex");
        let resolved = ResolvedCharacter::assemble(parts, metadata());
        let value = serde_json::to_value(&resolved).expect("serializable");
        assert_eq!(value["name"], "Vex");
        assert_eq!(value["metadata"]["steps"][0]["step"], "abilities");
    }

    #[test]
    fn step_names_display_snake_case() {
        assert_eq!(
            ResolutionStep::SavingThrowsAndSkills.to_string(),
            "saving_throws_and_skills"
        );
    }
}
