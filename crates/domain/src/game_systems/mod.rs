//! Game system rules for D&D 5th Edition.
//!
//! The resolvers only see the traits in `traits.rs`; `Dnd5eSystem`
//! supplies the formulas and progression tables and `RuleTables` the
//! fixed dictionaries (proficiencies, languages, feature classification).

mod dnd5e;
mod rule_tables;
mod traits;

pub use dnd5e::{Dnd5eSystem, SkillDefinition, MAX_LEVEL};
pub use rule_tables::{title_case, ProficiencyDefinition, RuleTables, WeaponTier};
pub use traits::{CalculationEngine, CasterType, ProficiencyLevel, SpellcastingSystem};
