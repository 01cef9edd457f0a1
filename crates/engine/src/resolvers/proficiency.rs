//! Weapon, armor and tool proficiencies.
//!
//! Skills and saving throws arrive as `proficiency` modifiers too; they are
//! left to the skills resolver and never show up here, not even as skips.

use std::collections::HashSet;

use sheetforge_domain::{
    ModifierKind, ProficiencyEntry, ProficiencyResult, SkipReason, SkipRecord, WeaponTier,
};

use super::{Resolved, ResolverIssue};
use crate::context::ResolutionContext;
use crate::modifier_index::ModifierIndex;

const SAVING_THROW_SUFFIX: &str = "-saving-throws";

pub fn resolve_proficiencies(
    index: &ModifierIndex<'_>,
    context: &ResolutionContext,
) -> Resolved<ProficiencyResult> {
    let rules = context.rules();
    let mut result = ProficiencyResult::default();
    let mut tiers = Vec::new();
    let mut seen = HashSet::new();

    for entry in index.by_kind(ModifierKind::Proficiency) {
        let key = entry.subtype().to_lowercase();
        if rules.is_skill(&key) || key.ends_with(SAVING_THROW_SUFFIX) {
            continue;
        }
        if rules.is_choice_placeholder(&key) {
            result
                .skipped
                .push(SkipRecord::new(key, SkipReason::ChoicePlaceholder));
            continue;
        }
        if !entry.is_granted() {
            result.skipped.push(SkipRecord::new(key, SkipReason::NotGranted));
            continue;
        }
        let Some(definition) = rules.proficiency(&key) else {
            result.skipped.push(SkipRecord::new(key, SkipReason::Unmapped));
            continue;
        };
        // Alternate spellings of one weapon collapse onto the table key.
        let canonical = rules.canonical_proficiency_key(&key);
        if !seen.insert(canonical.clone()) {
            result.skipped.push(SkipRecord::new(key, SkipReason::Duplicate));
            continue;
        }

        if definition.is_category_grant {
            if let Some(tier) = definition.weapon_tier {
                tiers.push((tier, canonical.clone()));
            }
        }
        result.entries.push(ProficiencyEntry {
            source_key: canonical,
            display_name: definition.display_name.to_string(),
            category: definition.category,
        });
    }

    if !tiers.is_empty() {
        let mut kept = Vec::with_capacity(result.entries.len());
        for entry in std::mem::take(&mut result.entries) {
            match covering_category(&entry, &tiers, context) {
                Some(category) => result.skipped.push(SkipRecord::new(
                    entry.source_key,
                    SkipReason::Subsumed {
                        category: category.to_string(),
                    },
                )),
                None => kept.push(entry),
            }
        }
        result.entries = kept;
    }

    let unmapped: Vec<&str> = result
        .skipped
        .iter()
        .filter(|s| s.reason == SkipReason::Unmapped)
        .map(|s| s.key.as_str())
        .collect();
    let issues = if unmapped.is_empty() {
        Vec::new()
    } else {
        vec![ResolverIssue::warning(format!(
            "{} proficiencies have no display mapping: {}",
            unmapped.len(),
            unmapped.join(", ")
        ))]
    };

    Resolved::with_issues(result, issues)
}

/// The category grant that covers a specific weapon, if one was collected.
fn covering_category<'t>(
    entry: &ProficiencyEntry,
    tiers: &'t [(WeaponTier, String)],
    context: &ResolutionContext,
) -> Option<&'t str> {
    let definition = context.rules().proficiency(&entry.source_key)?;
    if definition.is_category_grant {
        return None;
    }
    let tier = definition.weapon_tier?;
    tiers
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|(_, key)| key.as_str())
}
