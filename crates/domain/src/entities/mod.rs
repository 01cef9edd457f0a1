//! Domain entities - resolved character data and its parts

mod ability;
mod defenses;
mod encumbrance;
mod feature;
mod inventory;
mod language;
mod modifier;
mod proficiency;
mod resolved;
mod skills;
mod skip;
mod spellcasting;

pub use ability::{Ability, AbilityResult, AbilityScores};
pub use defenses::Defenses;
pub use encumbrance::{CarryingCapacity, EncumbranceLevel, EncumbranceResult, SpeedPenalty};
pub use feature::{FeatureCategory, FeatureEntry, FeatureResult, FeatureSource, TraitEntry};
pub use inventory::{ContainerItem, InventoryItem, InventoryResult, COINS_PER_POUND};
pub use language::{LanguageChoice, LanguageEntry, LanguageResult};
pub use modifier::{ModifierKind, ModifierSource};
pub use proficiency::{ProficiencyCategory, ProficiencyEntry, ProficiencyResult};
pub use resolved::{
    Biography, ClassSummary, PipelineMessage, ProcessingMetadata, ResolutionStep,
    ResolvedCharacter, ResolvedParts, StepRecord, StepStatus,
};
pub use skills::{SavingThrow, SkillCheck, SkillSheet};
pub use skip::{SkipReason, SkipRecord};
pub use spellcasting::{
    CasterClassInfo, SlotProgression, SpellSlotTable, SpellcastingResult, MAX_SPELL_LEVEL,
};
