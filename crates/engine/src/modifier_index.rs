//! Queryable view over a record's modifier lists.
//!
//! The character service repeats the same fact in several per-source
//! lists (a racial language may also appear under `background`). The index
//! borrows every entry once, tags it with its source and parsed kind, and
//! groups it by kind and by (kind, lowercased subtype). Deduplication stays
//! with the resolvers.

use std::collections::HashMap;

use sheetforge_domain::{ModifierKind, ModifierSource, ModifierSources, RawModifier};

/// Borrowed view of one modifier.
#[derive(Debug, Clone, Copy)]
pub struct ModifierEntry<'a> {
    pub source: ModifierSource,
    pub kind: ModifierKind,
    raw: &'a RawModifier,
}

impl<'a> ModifierEntry<'a> {
    pub fn subtype(&self) -> &'a str {
        self.raw.sub_type.trim()
    }

    pub fn fixed_value(&self) -> Option<i32> {
        self.raw.fixed_value
    }

    pub fn friendly_name(&self) -> Option<&'a str> {
        self.raw
            .friendly_subtype_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn is_granted(&self) -> bool {
        self.raw.is_granted
    }

    /// The service's id, or the subtype when the entry has none.
    pub fn id(&self) -> &'a str {
        self.raw.id.as_deref().unwrap_or_else(|| self.subtype())
    }
}

fn subtype_key(kind: ModifierKind, subtype: &str) -> (ModifierKind, String) {
    (kind, subtype.trim().to_lowercase())
}

/// Every modifier of a record, in source order (race, class, background,
/// feat, item) and list order within a source.
#[derive(Debug, Clone, Default)]
pub struct ModifierIndex<'a> {
    entries: Vec<ModifierEntry<'a>>,
    by_kind: HashMap<ModifierKind, Vec<usize>>,
    by_subtype: HashMap<(ModifierKind, String), Vec<usize>>,
}

impl<'a> ModifierIndex<'a> {
    pub fn build(sources: &'a ModifierSources) -> Self {
        let mut index = Self::default();
        for source in ModifierSource::ALL {
            let list = match source {
                ModifierSource::Race => &sources.race,
                ModifierSource::Class => &sources.class,
                ModifierSource::Background => &sources.background,
                ModifierSource::Feat => &sources.feat,
                ModifierSource::Item => &sources.item,
            };
            for raw in list {
                // ModifierKind::from_str never fails; unknown types map to Unknown
                let kind = raw.modifier_type.parse().unwrap_or(ModifierKind::Unknown);
                let position = index.entries.len();
                index.by_kind.entry(kind).or_default().push(position);
                index
                    .by_subtype
                    .entry(subtype_key(kind, &raw.sub_type))
                    .or_default()
                    .push(position);
                index.entries.push(ModifierEntry { source, kind, raw });
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModifierEntry<'a>> {
        self.entries.iter()
    }

    pub fn by_kind(&self, kind: ModifierKind) -> impl Iterator<Item = &ModifierEntry<'a>> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.entries.get(i))
    }

    /// Entries of this kind whose subtype matches, ignoring case.
    pub fn by_kind_and_subtype(
        &self,
        kind: ModifierKind,
        subtype: &str,
    ) -> impl Iterator<Item = &ModifierEntry<'a>> {
        self.by_subtype
            .get(&subtype_key(kind, subtype))
            .into_iter()
            .flatten()
            .filter_map(|&i| self.entries.get(i))
    }

    /// Any entry of this kind and subtype.
    pub fn contains(&self, kind: ModifierKind, subtype: &str) -> bool {
        self.by_kind_and_subtype(kind, subtype).next().is_some()
    }

    /// Sum of fixed values; entries without a value count as 0.
    pub fn sum_fixed(&self, kind: ModifierKind, subtype: &str) -> i32 {
        self.by_kind_and_subtype(kind, subtype)
            .filter_map(|e| e.fixed_value())
            .sum()
    }

    pub fn max_fixed(&self, kind: ModifierKind, subtype: &str) -> Option<i32> {
        self.by_kind_and_subtype(kind, subtype)
            .filter_map(|e| e.fixed_value())
            .max()
    }

    /// Entry count per kind, for logging.
    pub fn kind_counts(&self) -> HashMap<ModifierKind, usize> {
        self.by_kind.iter().map(|(k, v)| (*k, v.len())).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use sheetforge_domain::RawModifier;

    pub fn modifier(kind: &str, subtype: &str, value: Option<i32>) -> RawModifier {
        RawModifier {
            id: None,
            modifier_type: kind.to_string(),
            sub_type: subtype.to_string(),
            fixed_value: value,
            entity_type_id: None,
            friendly_subtype_name: None,
            is_granted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::modifier;
    use super::*;

    fn sources() -> ModifierSources {
        ModifierSources {
            race: vec![
                modifier("bonus", "constitution-score", Some(2)),
                modifier("language", "dwarvish", None),
            ],
            class: vec![modifier("proficiency", "light-armor", None)],
            background: vec![modifier("language", "dwarvish", None)],
            feat: vec![modifier("bonus", "Constitution-Score", Some(1))],
            item: vec![
                modifier("set", "strength-score", Some(19)),
                modifier("ignored", "whatever", None),
            ],
        }
    }

    #[test]
    fn indexes_every_entry_in_source_order() {
        let sources = sources();
        let index = ModifierIndex::build(&sources);
        assert_eq!(index.len(), 7);
        let order: Vec<_> = index.iter().map(|e| e.source).collect();
        assert_eq!(order[0], ModifierSource::Race);
        assert_eq!(order[6], ModifierSource::Item);
    }

    #[test]
    fn queries_by_kind_and_subtype_case_insensitively() {
        let sources = sources();
        let index = ModifierIndex::build(&sources);
        assert_eq!(index.sum_fixed(ModifierKind::Bonus, "constitution-score"), 3);
        assert_eq!(index.max_fixed(ModifierKind::Set, "strength-score"), Some(19));
        assert_eq!(index.max_fixed(ModifierKind::Set, "dexterity-score"), None);
        assert_eq!(index.by_kind(ModifierKind::Language).count(), 2);
        assert!(index.contains(ModifierKind::Proficiency, "light-armor"));
    }

    #[test]
    fn subtype_groups_keep_source_order() {
        let sources = sources();
        let index = ModifierIndex::build(&sources);
        let dwarvish: Vec<_> = index
            .by_kind_and_subtype(ModifierKind::Language, " Dwarvish ")
            .map(|e| e.source)
            .collect();
        assert_eq!(
            dwarvish,
            vec![ModifierSource::Race, ModifierSource::Background]
        );
        let constitution: Vec<_> = index
            .by_kind_and_subtype(ModifierKind::Bonus, "constitution-score")
            .map(|e| e.subtype())
            .collect();
        assert_eq!(constitution, vec!["constitution-score", "Constitution-Score"]);
        assert_eq!(
            index
                .by_kind_and_subtype(ModifierKind::Set, "constitution-score")
                .count(),
            0
        );
    }

    #[test]
    fn unknown_types_are_kept_as_unknown() {
        let sources = sources();
        let index = ModifierIndex::build(&sources);
        let unknown: Vec<_> = index.by_kind(ModifierKind::Unknown).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].subtype(), "whatever");
        assert_eq!(index.kind_counts().get(&ModifierKind::Unknown), Some(&1));
    }

    #[test]
    fn id_falls_back_to_subtype() {
        let sources = ModifierSources {
            race: vec![RawModifier {
                id: Some("17".to_string()),
                ..modifier("language", "elvish", None)
            }],
            class: vec![modifier("language", "common", None)],
            ..ModifierSources::default()
        };
        let index = ModifierIndex::build(&sources);
        let ids: Vec<_> = index.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["17", "common"]);
    }

    #[test]
    fn empty_sources_give_empty_index() {
        let sources = ModifierSources::default();
        let index = ModifierIndex::build(&sources);
        assert!(index.is_empty());
        assert_eq!(index.by_kind(ModifierKind::Bonus).count(), 0);
    }
}
