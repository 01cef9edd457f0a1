use std::collections::HashSet;

use sheetforge_domain::{title_case, Defenses, ModifierKind};

use super::Resolved;
use crate::modifier_index::ModifierIndex;

/// Resistances, immunities and vulnerabilities from granted modifiers.
pub fn resolve_defenses(index: &ModifierIndex<'_>) -> Resolved<Defenses> {
    Resolved::clean(Defenses {
        resistances: collect(index, ModifierKind::Resistance),
        immunities: collect(index, ModifierKind::Immunity),
        vulnerabilities: collect(index, ModifierKind::Vulnerability),
    })
}

fn collect(index: &ModifierIndex<'_>, kind: ModifierKind) -> Vec<String> {
    let mut seen = HashSet::new();
    index
        .by_kind(kind)
        .filter(|e| e.is_granted())
        .filter(|e| seen.insert(e.subtype().to_lowercase()))
        .map(|e| {
            e.friendly_name()
                .map_or_else(|| title_case(e.subtype()), str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier_index::test_support::modifier;
    use sheetforge_domain::{ModifierSources, RawModifier};

    #[test]
    fn collects_and_deduplicates_defenses() {
        let sources = ModifierSources {
            race: vec![
                modifier("resistance", "poison", None),
                modifier("immunity", "poisoned", None),
            ],
            item: vec![
                modifier("resistance", "Poison", None),
                RawModifier {
                    friendly_subtype_name: Some("Fire".to_string()),
                    ..modifier("resistance", "fire", None)
                },
                RawModifier {
                    is_granted: false,
                    ..modifier("vulnerability", "cold", None)
                },
            ],
            ..ModifierSources::default()
        };
        let index = ModifierIndex::build(&sources);
        let defenses = resolve_defenses(&index).value;
        assert_eq!(defenses.resistances, vec!["Poison", "Fire"]);
        assert_eq!(defenses.immunities, vec!["Poisoned"]);
        assert!(defenses.vulnerabilities.is_empty());
    }

    #[test]
    fn no_modifiers_no_defenses() {
        let sources = ModifierSources::default();
        let index = ModifierIndex::build(&sources);
        assert!(resolve_defenses(&index).value.is_empty());
    }
}
