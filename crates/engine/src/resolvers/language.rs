//! Known languages and outstanding language picks.

use std::collections::HashSet;

use sheetforge_domain::{
    title_case, LanguageChoice, LanguageEntry, LanguageResult, ModifierKind, SkipReason,
    SkipRecord,
};

use super::{Resolved, ResolverIssue};
use crate::context::ResolutionContext;
use crate::modifier_index::ModifierIndex;

pub fn resolve_languages(
    index: &ModifierIndex<'_>,
    context: &ResolutionContext,
) -> Resolved<LanguageResult> {
    let rules = context.rules();
    let mut result = LanguageResult::default();
    let mut seen = HashSet::new();

    for entry in index.by_kind(ModifierKind::Language) {
        let subtype = entry.subtype().to_lowercase();

        // A choice never grants a language, even "choose-elvish-or-dwarvish"
        if rules.is_choice_placeholder(&subtype) {
            result.choices.push(LanguageChoice {
                id: entry.id().to_string(),
                label: entry
                    .friendly_name()
                    .map_or_else(|| title_case(&subtype), str::to_string),
                subtype,
                source: entry.source,
            });
            continue;
        }
        if !entry.is_granted() {
            result
                .skipped
                .push(SkipRecord::new(subtype, SkipReason::NotGranted));
            continue;
        }
        if !seen.insert(subtype.clone()) {
            result
                .skipped
                .push(SkipRecord::new(subtype, SkipReason::Duplicate));
            continue;
        }

        result.languages.push(LanguageEntry {
            id: entry.id().to_string(),
            name: rules.language_name(&subtype),
            subtype,
            source: entry.source,
            is_granted: true,
        });
    }

    let issues = if result.languages.is_empty() {
        vec![ResolverIssue::warning("no languages found")]
    } else {
        Vec::new()
    };
    Resolved::with_issues(result, issues)
}
