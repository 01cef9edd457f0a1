//! Class features, racial traits and feats.
//!
//! Identity is the service's numeric id. Every skipped entry is recorded
//! with its reason so a caller can show why a feature is missing.

use std::collections::HashSet;

use sheetforge_domain::{
    CharacterRecord, ClassRecord, FeatureCategory, FeatureEntry, FeatureRecord, FeatureResult,
    FeatureSource, SkipReason, SkipRecord, TraitRecord,
};

use super::text::strip_html;
use super::Resolved;
use crate::context::ResolutionContext;

pub fn resolve_features(
    record: &CharacterRecord,
    context: &ResolutionContext,
) -> Resolved<FeatureResult> {
    let mut result = FeatureResult::default();

    let mut seen = HashSet::new();
    for class in record.classes.as_deref().unwrap_or_default() {
        collect_class_features(class, context, &mut seen, &mut result);
    }

    if let Some(race) = &record.race {
        let race_source = FeatureSource::Race {
            name: race.full_name.clone(),
        };
        let mut seen = HashSet::new();
        for racial in &race.racial_traits {
            if let Some(entry) = trait_entry(racial, &race_source, context, &mut seen, &mut result)
            {
                result.racial_traits.push(entry);
            }
        }

        if let Some(subrace) = &race.subrace_definition {
            let subrace_source = FeatureSource::Subrace {
                name: subrace.full_name.clone(),
            };
            for racial in &subrace.racial_traits {
                let Some(entry) =
                    trait_entry(racial, &subrace_source, context, &mut seen, &mut result)
                else {
                    continue;
                };
                let replaced = result.racial_traits.iter().position(|t| {
                    matches!(t.source, FeatureSource::Race { .. })
                        && t.name.eq_ignore_ascii_case(&entry.name)
                });
                if let Some(position) = replaced {
                    let old = result.racial_traits.remove(position);
                    result.skipped.push(SkipRecord::new(
                        old.name,
                        SkipReason::Superseded {
                            by: subrace.full_name.clone(),
                        },
                    ));
                }
                result.racial_traits.push(entry);
            }
        }
    }

    let mut seen = HashSet::new();
    for feat in &record.feats {
        let definition = &feat.definition;
        if !seen.insert(definition.id) {
            result
                .skipped
                .push(SkipRecord::new(&definition.name, SkipReason::Duplicate));
            continue;
        }
        result.feats.push(entry(
            context,
            None,
            definition.id,
            &definition.name,
            definition.description.as_deref(),
            None,
            FeatureSource::Feat,
        ));
    }

    Resolved::clean(result)
}

fn collect_class_features(
    class: &ClassRecord,
    context: &ResolutionContext,
    seen: &mut HashSet<i64>,
    result: &mut FeatureResult,
) {
    let settings = context.settings();
    let class_name = class.definition.name.trim();
    let class_source = FeatureSource::Class {
        name: class_name.to_string(),
    };
    let subclass = class.subclass_definition.as_ref().map(|s| {
        (
            &s.class_features,
            FeatureSource::Subclass {
                class_name: class_name.to_string(),
                name: s.name.trim().to_string(),
            },
        )
    });

    let groups = std::iter::once((&class.definition.class_features, class_source)).chain(subclass);
    for (features, source) in groups {
        for feature in features {
            if let Some(reason) = skip_reason(feature, class.level, context, seen) {
                result
                    .skipped
                    .push(SkipRecord::new(feature.name.trim(), reason));
                continue;
            }
            result.class_features.push(entry(
                context,
                Some(class_name),
                feature.id,
                &feature.name,
                feature.description.as_deref(),
                feature.required_level,
                source.clone(),
            ));
        }
    }

    tracing::trace!(
        class = %class_name,
        level = class.level,
        filter_by_level = settings.filter_features_by_level,
        "Collected class features"
    );
}

fn skip_reason(
    feature: &FeatureRecord,
    class_level: u8,
    context: &ResolutionContext,
    seen: &mut HashSet<i64>,
) -> Option<SkipReason> {
    let settings = context.settings();
    if context.rules().is_excluded_feature(&feature.name) {
        return Some(SkipReason::Administrative);
    }
    if let Some(required) = feature.required_level {
        if settings.filter_features_by_level && required > class_level {
            return Some(SkipReason::AboveClassLevel {
                required,
                class_level,
            });
        }
        if let Some(cap) = settings.max_feature_level {
            if required > cap {
                return Some(SkipReason::AboveLevelCap { required, cap });
            }
        }
    }
    if !seen.insert(feature.id) {
        return Some(SkipReason::Duplicate);
    }
    None
}

fn trait_entry(
    racial: &TraitRecord,
    source: &FeatureSource,
    context: &ResolutionContext,
    seen: &mut HashSet<i64>,
    result: &mut FeatureResult,
) -> Option<FeatureEntry> {
    let definition = &racial.definition;
    let name = definition.name.trim();
    let reason = if context.rules().is_administrative_racial_trait(name) {
        Some(SkipReason::Administrative)
    } else if !seen.insert(definition.id) {
        Some(SkipReason::Duplicate)
    } else {
        None
    };
    if let Some(reason) = reason {
        result.skipped.push(SkipRecord::new(name, reason));
        return None;
    }
    Some(entry(
        context,
        None,
        definition.id,
        name,
        definition.description.as_deref(),
        None,
        source.clone(),
    ))
}

fn entry(
    context: &ResolutionContext,
    class_name: Option<&str>,
    id: i64,
    name: &str,
    description: Option<&str>,
    required_level: Option<u8>,
    source: FeatureSource,
) -> FeatureEntry {
    let raw = description.unwrap_or_default();
    let description = if context.settings().strip_html_descriptions {
        strip_html(raw)
    } else {
        raw.to_string()
    };
    let category: FeatureCategory = context
        .rules()
        .classify_feature(class_name, name, &description);

    FeatureEntry {
        id,
        name: name.trim().to_string(),
        description,
        required_level,
        source,
        category,
    }
}
