//! Resolver settings value object
//!
//! Replaces process-wide toggles: every resolution receives its settings
//! explicitly through the resolution context, so two characters resolved
//! side by side can use different settings.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Highest value accepted for `max_feature_level`.
pub const MAX_FEATURE_LEVEL_LIMIT: u8 = 20;

/// All configurable resolution settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Drop class features whose required level exceeds the class level
    #[serde(default = "default_filter_features_by_level")]
    pub filter_features_by_level: bool,

    /// Drop every feature above this level regardless of class level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_feature_level: Option<u8>,

    /// Count carried coins toward inventory weight
    #[serde(default)]
    pub include_coin_weight: bool,

    /// Reduce HTML descriptions to plain text
    #[serde(default = "default_strip_html_descriptions")]
    pub strip_html_descriptions: bool,
}

fn default_filter_features_by_level() -> bool { true }
fn default_strip_html_descriptions() -> bool { true }

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            filter_features_by_level: true,
            max_feature_level: None,
            include_coin_weight: false,
            strip_html_descriptions: true,
        }
    }
}

impl ResolverSettings {
    pub fn with_max_feature_level(mut self, level: u8) -> Result<Self, DomainError> {
        if !(1..=MAX_FEATURE_LEVEL_LIMIT).contains(&level) {
            return Err(DomainError::validation(format!(
                "max_feature_level must be between 1 and {}, got {}",
                MAX_FEATURE_LEVEL_LIMIT, level
            )));
        }
        self.max_feature_level = Some(level);
        Ok(self)
    }

    pub fn with_coin_weight(mut self, enabled: bool) -> Self {
        self.include_coin_weight = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ResolverSettings::default();
        assert!(settings.filter_features_by_level);
        assert_eq!(settings.max_feature_level, None);
        assert!(!settings.include_coin_weight);
        assert!(settings.strip_html_descriptions);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: ResolverSettings =
            serde_json::from_str(r#"{"include_coin_weight": true}"#).expect("valid settings");
        assert!(settings.include_coin_weight);
        assert!(settings.filter_features_by_level);
        assert!(settings.strip_html_descriptions);
    }

    #[test]
    fn max_feature_level_is_range_checked() {
        assert!(ResolverSettings::default().with_max_feature_level(0).is_err());
        assert!(ResolverSettings::default().with_max_feature_level(21).is_err());
        let settings = ResolverSettings::default()
            .with_max_feature_level(5)
            .expect("in range");
        assert_eq!(settings.max_feature_level, Some(5));
    }
}
