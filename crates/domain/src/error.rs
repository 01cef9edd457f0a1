//! Unified error types for the domain layer
//!
//! Provides a common error type for parsing and validating character data,
//! so callers never have to fall back to `String` errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., a required list is missing)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and enum identifiers)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A rule table has no entry for the requested key
    #[error("No {table} entry for {key}")]
    MissingRuleEntry { table: &'static str, key: String },
}

impl DomainError {
    /// Creates a validation error for malformed or missing input.
    ///
    /// # Example
    /// ```ignore
    /// if record.classes.is_none() {
    ///     return Err(DomainError::validation("character has no class list"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// ```ignore
    /// impl FromStr for Ability {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "strength" => Ok(Self::Strength),
    ///             _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a missing rule table entry error
    pub fn missing_rule_entry(table: &'static str, key: impl Into<String>) -> Self {
        Self::MissingRuleEntry {
            table,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("character has no class list");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: character has no class list"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown ability: luck");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("luck"));
    }

    #[test]
    fn test_missing_rule_entry_error() {
        let err = DomainError::missing_rule_entry("spell slot", "caster level 24");
        assert_eq!(err.to_string(), "No spell slot entry for caster level 24");
    }
}
