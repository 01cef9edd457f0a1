//! Saving throws, skill checks and passive perception.

use sheetforge_domain::{
    Ability, AbilityScores, CalculationEngine, ModifierKind, ProficiencyLevel, SavingThrow,
    SkillCheck, SkillSheet,
};

use super::Resolved;
use crate::context::ResolutionContext;
use crate::modifier_index::ModifierIndex;

/// Jack of All Trades style grants apply half proficiency to every check.
const ALL_ABILITY_CHECKS: &str = "ability-checks";
const PASSIVE_PERCEPTION: &str = "passive-perception";

pub fn resolve_skills(
    index: &ModifierIndex<'_>,
    abilities: &AbilityScores,
    proficiency_bonus: i32,
    context: &ResolutionContext,
) -> Resolved<SkillSheet> {
    let system = context.system();
    let half_on_all_checks = granted(index, ModifierKind::HalfProficiency, ALL_ABILITY_CHECKS);

    let saving_throws = Ability::ALL
        .into_iter()
        .map(|ability| {
            let subtype = ability.saving_throw_subtype();
            let proficiency = level_for(index, &subtype, false);
            SavingThrow {
                ability,
                proficiency,
                modifier: system.saving_throw_modifier(
                    abilities,
                    ability,
                    proficiency,
                    proficiency_bonus,
                ),
            }
        })
        .collect();

    let skills: Vec<SkillCheck> = system
        .skills()
        .iter()
        .map(|skill| {
            let proficiency = level_for(index, skill.slug, half_on_all_checks);
            SkillCheck {
                name: skill.name.to_string(),
                slug: skill.slug.to_string(),
                ability: skill.ability,
                proficiency,
                modifier: system.skill_modifier(
                    abilities,
                    skill.ability,
                    proficiency,
                    proficiency_bonus,
                ),
            }
        })
        .collect();

    let perception = skills
        .iter()
        .find(|s| s.slug == "perception")
        .map_or_else(|| abilities.modifier(Ability::Wisdom), |s| s.modifier);
    let passive_bonus: i32 = index
        .by_kind_and_subtype(ModifierKind::Bonus, PASSIVE_PERCEPTION)
        .filter(|e| e.is_granted())
        .filter_map(|e| e.fixed_value())
        .sum();

    Resolved::clean(SkillSheet {
        proficiency_bonus,
        saving_throws,
        skills,
        passive_perception: system.passive_perception(perception) + passive_bonus,
    })
}

/// Highest granted level for a subtype; expertise beats proficiency beats half.
fn level_for(index: &ModifierIndex<'_>, subtype: &str, half_by_default: bool) -> ProficiencyLevel {
    if granted(index, ModifierKind::Expertise, subtype) {
        ProficiencyLevel::Expert
    } else if granted(index, ModifierKind::Proficiency, subtype) {
        ProficiencyLevel::Proficient
    } else if half_by_default || granted(index, ModifierKind::HalfProficiency, subtype) {
        ProficiencyLevel::Half
    } else {
        ProficiencyLevel::None
    }
}

fn granted(index: &ModifierIndex<'_>, kind: ModifierKind, subtype: &str) -> bool {
    index
        .by_kind_and_subtype(kind, subtype)
        .any(|e| e.is_granted())
}
