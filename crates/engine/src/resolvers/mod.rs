//! Resolvers: pure functions from the record (and earlier results) to one
//! part of the resolved character.
//!
//! No resolver fails. Problems are reported as issues next to a value that
//! is always usable (a default when nothing better exists); the pipeline
//! decides how to surface them.

mod ability;
mod caster;
mod defenses;
mod encumbrance;
mod feature_trait;
mod inventory;
mod language;
mod proficiency;
mod skills;
mod text;

pub use ability::resolve_abilities;
pub use caster::resolve_spellcasting;
pub use defenses::resolve_defenses;
pub use encumbrance::resolve_encumbrance;
pub use feature_trait::resolve_features;
pub use inventory::resolve_inventory;
pub use language::resolve_languages;
pub use proficiency::resolve_proficiencies;
pub use skills::resolve_skills;
pub use text::strip_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Something was left out or defaulted; the result is still correct
    /// for the data given.
    Warning,
    /// A rule lookup failed and a safe default replaced the real value.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

impl ResolverIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }
}

/// A resolver's value and whatever it had to report along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub issues: Vec<ResolverIssue>,
}

impl<T> Resolved<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    pub fn with_issues(value: T, issues: Vec<ResolverIssue>) -> Self {
        Self { value, issues }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .map(|i| i.message.as_str())
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .map(|i| i.message.as_str())
    }
}
