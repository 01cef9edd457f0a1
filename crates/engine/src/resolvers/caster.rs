//! Caster archetypes, multiclass caster level and slot tables.
//!
//! Regular slots come from the lone caster class's own table when exactly
//! one class feeds the shared pool, and from the multiclass table at the
//! combined caster level otherwise. Pact magic is always computed on its
//! own from the warlock level and never merged into the regular table.

use sheetforge_domain::{
    AbilityScores, CalculationEngine, CasterClassInfo, CasterType, ClassRecord, DomainError,
    SlotProgression, SpellSlotTable, SpellcastingResult, SpellcastingSystem,
};

use super::{Resolved, ResolverIssue};
use crate::context::ResolutionContext;

pub fn resolve_spellcasting(
    classes: &[ClassRecord],
    abilities: &AbilityScores,
    proficiency_bonus: i32,
    context: &ResolutionContext,
) -> Resolved<SpellcastingResult> {
    let system = context.system();
    let rules = context.rules();
    let mut issues = Vec::new();

    let infos: Vec<CasterClassInfo> = classes
        .iter()
        .map(|class| {
            let class_name = class.definition.name.trim();
            let subclass_name = class
                .subclass_definition
                .as_ref()
                .map(|s| s.name.trim().to_string());
            let spell_less = rules.is_spell_less(class_name)
                || subclass_name.as_deref().is_some_and(|s| rules.is_spell_less(s));
            let caster_type = if spell_less {
                CasterType::None
            } else {
                system.caster_type(class_name, subclass_name.as_deref())
            };
            let spellcasting_ability = match caster_type {
                CasterType::None => None,
                _ => system.spellcasting_ability(class_name, subclass_name.as_deref()),
            };

            CasterClassInfo {
                class_name: class_name.to_string(),
                subclass_name,
                level: class.level,
                caster_type,
                caster_level_contribution: caster_type.effective_caster_levels(class.level),
                is_pact_magic: caster_type == CasterType::Pact,
                spellcasting_ability,
                spell_save_dc: spellcasting_ability
                    .map(|a| system.spell_save_dc(abilities, a, proficiency_bonus)),
                spell_attack_bonus: spellcasting_ability
                    .map(|a| system.spell_attack_bonus(abilities, a, proficiency_bonus)),
            }
        })
        .collect();

    let shared: Vec<&CasterClassInfo> = infos.iter().filter(|c| c.is_shared_pool_caster()).collect();
    let caster_level_sum: u32 = shared
        .iter()
        .map(|c| u32::from(c.caster_level_contribution))
        .sum();
    let caster_level = u8::try_from(caster_level_sum).unwrap_or(u8::MAX);

    let (progression, regular_slots) = match shared.as_slice() {
        [] => (SlotProgression::NonCaster, Some(SpellSlotTable::empty())),
        [only] => (
            SlotProgression::SingleClass {
                class_name: only.class_name.clone(),
            },
            system.single_class_slots(only.caster_type, only.level),
        ),
        _ => (
            SlotProgression::Multiclass,
            system.multiclass_slots(caster_level),
        ),
    };
    let regular_slots = regular_slots.unwrap_or_else(|| {
        let err = DomainError::missing_rule_entry(
            "spell slot",
            format!("caster level {}", caster_level),
        );
        issues.push(ResolverIssue::error(format!("{}; using empty slots", err)));
        SpellSlotTable::empty()
    });

    let pact_level_sum: u32 = infos
        .iter()
        .filter(|c| c.is_pact_magic)
        .map(|c| u32::from(c.level))
        .sum();
    let pact_level = u8::try_from(pact_level_sum).unwrap_or(u8::MAX);
    let pact_slots = if pact_level == 0 {
        SpellSlotTable::empty()
    } else {
        system.pact_slots(pact_level).unwrap_or_else(|| {
            let err = DomainError::missing_rule_entry(
                "pact magic",
                format!("warlock level {}", pact_level),
            );
            issues.push(ResolverIssue::error(format!("{}; using empty slots", err)));
            SpellSlotTable::empty()
        })
    };

    Resolved::with_issues(
        SpellcastingResult {
            classes: infos,
            caster_level,
            progression,
            regular_slots,
            pact_level,
            pact_slots,
        },
        issues,
    )
}
