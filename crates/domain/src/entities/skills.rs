//! Saving throws and skills.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use crate::game_systems::ProficiencyLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingThrow {
    pub ability: Ability,
    pub proficiency: ProficiencyLevel,
    pub modifier: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCheck {
    pub name: String,
    /// Modifier subtype identifier (`sleight-of-hand`).
    pub slug: String,
    pub ability: Ability,
    pub proficiency: ProficiencyLevel,
    pub modifier: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSheet {
    pub proficiency_bonus: i32,
    pub saving_throws: Vec<SavingThrow>,
    pub skills: Vec<SkillCheck>,
    pub passive_perception: i32,
}

impl SkillSheet {
    pub fn skill(&self, slug: &str) -> Option<&SkillCheck> {
        self.skills.iter().find(|s| s.slug == slug)
    }

    pub fn saving_throw(&self, ability: Ability) -> Option<&SavingThrow> {
        self.saving_throws.iter().find(|s| s.ability == ability)
    }
}
