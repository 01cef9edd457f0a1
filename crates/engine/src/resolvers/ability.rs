//! Ability totals and modifiers.
//!
//! total = override when present, otherwise base + bonus raised to any
//! `set` value. Bonuses are always re-summed from the modifier lists;
//! the record's pre-aggregated `bonusStats` are never read.

use sheetforge_domain::{
    Ability, AbilityResult, AbilityScores, CalculationEngine, CharacterRecord, ModifierKind,
    StatValue,
};

use super::{Resolved, ResolverIssue};
use crate::context::ResolutionContext;
use crate::modifier_index::ModifierIndex;

const DEFAULT_SCORE: i32 = 10;

pub fn resolve_abilities(
    record: &CharacterRecord,
    index: &ModifierIndex<'_>,
    context: &ResolutionContext,
) -> Resolved<AbilityScores> {
    let mut issues = Vec::new();
    let mut results = Vec::with_capacity(Ability::ALL.len());

    for ability in Ability::ALL {
        let base = match stat_value(&record.stats, ability) {
            Some(score) => score,
            None => {
                issues.push(ResolverIssue::warning(format!(
                    "No base score for {}; using {}",
                    ability, DEFAULT_SCORE
                )));
                DEFAULT_SCORE
            }
        };

        let subtype = ability.score_subtype();
        let bonus = index.sum_fixed(ModifierKind::Bonus, &subtype);
        let set_floor = index.max_fixed(ModifierKind::Set, &subtype);
        let override_score = stat_value(&record.override_stats, ability);

        let total = match override_score {
            Some(score) => score,
            None => {
                let summed = base + bonus;
                set_floor.map_or(summed, |floor| summed.max(floor))
            }
        };

        results.push(AbilityResult {
            ability,
            base,
            bonus,
            override_score,
            total,
            modifier: context.system().ability_modifier(total),
        });
    }

    Resolved::with_issues(AbilityScores::from_results(results), issues)
}

/// First non-null value for the ability's stat id.
fn stat_value(stats: &[StatValue], ability: Ability) -> Option<i32> {
    stats
        .iter()
        .filter(|s| s.id == ability.stat_id())
        .find_map(|s| s.value)
}
