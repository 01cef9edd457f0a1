//! Environment overrides for resolver settings.
//!
//! Supported environment variables:
//! - SHEETFORGE_FILTER_FEATURES_BY_LEVEL: drop features above the class level (bool)
//! - SHEETFORGE_MAX_FEATURE_LEVEL: global feature level cap (range: 1-20)
//! - SHEETFORGE_INCLUDE_COIN_WEIGHT: count coins toward carried weight (bool)
//! - SHEETFORGE_STRIP_HTML_DESCRIPTIONS: reduce descriptions to plain text (bool)
//!
//! Invalid values are logged and ignored; the default stays in place.

use sheetforge_domain::{ResolverSettings, MAX_FEATURE_LEVEL_LIMIT};

pub const FILTER_FEATURES_BY_LEVEL_VAR: &str = "SHEETFORGE_FILTER_FEATURES_BY_LEVEL";
pub const MAX_FEATURE_LEVEL_VAR: &str = "SHEETFORGE_MAX_FEATURE_LEVEL";
pub const INCLUDE_COIN_WEIGHT_VAR: &str = "SHEETFORGE_INCLUDE_COIN_WEIGHT";
pub const STRIP_HTML_DESCRIPTIONS_VAR: &str = "SHEETFORGE_STRIP_HTML_DESCRIPTIONS";

/// Default settings with process environment overrides applied.
pub fn load_settings_from_env() -> ResolverSettings {
    load_settings_from(|key| std::env::var(key).ok())
}

/// Default settings with overrides read through `lookup`.
pub fn load_settings_from(lookup: impl Fn(&str) -> Option<String>) -> ResolverSettings {
    let mut settings = ResolverSettings::default();

    if let Some(enabled) = env_bool(&lookup, FILTER_FEATURES_BY_LEVEL_VAR) {
        settings.filter_features_by_level = enabled;
    }
    if let Some(enabled) = env_bool(&lookup, INCLUDE_COIN_WEIGHT_VAR) {
        settings = settings.with_coin_weight(enabled);
    }
    if let Some(enabled) = env_bool(&lookup, STRIP_HTML_DESCRIPTIONS_VAR) {
        settings.strip_html_descriptions = enabled;
    }

    if let Some(val) = lookup(MAX_FEATURE_LEVEL_VAR) {
        match val.trim().parse::<u8>() {
            Ok(level) => match settings.with_max_feature_level(level) {
                Ok(updated) => {
                    settings = updated;
                    tracing::info!(level, "Applied {} environment variable", MAX_FEATURE_LEVEL_VAR);
                }
                Err(e) => tracing::warn!(
                    level,
                    error = %e,
                    "{} out of range [1, {}], ignoring",
                    MAX_FEATURE_LEVEL_VAR,
                    MAX_FEATURE_LEVEL_LIMIT
                ),
            },
            Err(_) => tracing::warn!(
                val = %val,
                "{} is not a valid level, ignoring",
                MAX_FEATURE_LEVEL_VAR
            ),
        }
    }

    settings
}

fn env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let val = lookup(key)?;
    let parsed = match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    };
    match parsed {
        Some(enabled) => tracing::info!(enabled, "Applied {} environment variable", key),
        None => tracing::warn!(val = %val, "{} is not a valid boolean, ignoring", key),
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ResolverSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_settings_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn no_overrides_gives_defaults() {
        assert_eq!(load(&[]), ResolverSettings::default());
    }

    #[test]
    fn applies_valid_overrides() {
        let settings = load(&[
            (FILTER_FEATURES_BY_LEVEL_VAR, "false"),
            (MAX_FEATURE_LEVEL_VAR, "10"),
            (INCLUDE_COIN_WEIGHT_VAR, "YES"),
            (STRIP_HTML_DESCRIPTIONS_VAR, "0"),
        ]);
        assert!(!settings.filter_features_by_level);
        assert_eq!(settings.max_feature_level, Some(10));
        assert!(settings.include_coin_weight);
        assert!(!settings.strip_html_descriptions);
    }

    #[test]
    fn ignores_invalid_values() {
        let settings = load(&[
            (MAX_FEATURE_LEVEL_VAR, "25"),
            (INCLUDE_COIN_WEIGHT_VAR, "sometimes"),
        ]);
        assert_eq!(settings.max_feature_level, None);
        assert!(!settings.include_coin_weight);

        let settings = load(&[(MAX_FEATURE_LEVEL_VAR, "ten")]);
        assert_eq!(settings.max_feature_level, None);
    }

    #[test]
    fn rejected_level_leaves_other_overrides_applied() {
        let settings = load(&[
            (MAX_FEATURE_LEVEL_VAR, "0"),
            (FILTER_FEATURES_BY_LEVEL_VAR, "off"),
            (STRIP_HTML_DESCRIPTIONS_VAR, "false"),
        ]);
        assert_eq!(settings.max_feature_level, None);
        assert!(!settings.filter_features_by_level);
        assert!(!settings.strip_html_descriptions);
    }
}
