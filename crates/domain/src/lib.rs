//! Sheetforge domain: character records, resolved results and the rule
//! system the resolution pipeline runs against.
//!
//! Nothing here performs I/O. `record` mirrors the character service's
//! JSON export; `entities` holds what the pipeline derives from it.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod record;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Ability, AbilityResult, AbilityScores, Biography, CarryingCapacity, CasterClassInfo,
    ClassSummary, ContainerItem, Defenses, EncumbranceLevel, EncumbranceResult, FeatureCategory,
    FeatureEntry, FeatureResult, FeatureSource, InventoryItem, InventoryResult, LanguageChoice,
    LanguageEntry, LanguageResult, ModifierKind, ModifierSource, PipelineMessage,
    ProcessingMetadata, ProficiencyCategory, ProficiencyEntry, ProficiencyResult,
    ResolutionStep, ResolvedCharacter, ResolvedParts, SavingThrow, SkillCheck, SkillSheet,
    SkipReason, SkipRecord, SlotProgression, SpeedPenalty, SpellSlotTable, SpellcastingResult,
    StepRecord, StepStatus, TraitEntry, COINS_PER_POUND, MAX_SPELL_LEVEL,
};

pub use error::DomainError;

// Re-export game system traits and types
pub use game_systems::{
    title_case, CalculationEngine, CasterType, Dnd5eSystem, ProficiencyDefinition,
    ProficiencyLevel, RuleTables, SkillDefinition, SpellcastingSystem, WeaponTier, MAX_LEVEL,
};

// Re-export ID types
pub use ids::{CharacterId, ResolutionId};

// Re-export input record types
pub use record::{
    BackgroundDefinition, BackgroundRecord, CharacterRecord, ClassDefinition, ClassRecord,
    Currencies, FeatRecord, FeatureRecord, InventoryRecord, ItemDefinition, ModifierSources,
    NotesRecord, PersonalityRecord, RaceRecord, RawModifier, StatValue, SubraceRecord,
    TraitDefinition, TraitRecord,
};

pub use value_objects::{ResolverSettings, MAX_FEATURE_LEVEL_LIMIT};
