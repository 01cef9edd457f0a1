//! Records of input entries a resolver declined to emit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an entry was left out of a resolved list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// No display mapping exists for the identifier
    Unmapped,
    /// The modifier exists but is not granted
    NotGranted,
    /// Already collected under the same key
    Duplicate,
    /// Covered by a broader category proficiency
    Subsumed { category: String },
    /// An unresolved "choose ..." placeholder
    ChoicePlaceholder,
    /// Bookkeeping entry (e.g. "Ability Score Increase")
    Administrative,
    /// Feature gained at a level the class has not reached
    AboveClassLevel { required: u8, class_level: u8 },
    /// Feature above the configured global level cap
    AboveLevelCap { required: u8, cap: u8 },
    /// Superseded by a subrace trait of the same name
    Superseded { by: String },
    /// Item has no definition data
    MissingDefinition,
    /// Item sits in a container that is not part of this inventory
    Orphaned { container_id: i64 },
    /// Container nesting loops back on itself
    ContainerCycle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped => write!(f, "no display mapping"),
            Self::NotGranted => write!(f, "not granted"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::Subsumed { category } => write!(f, "covered by {}", category),
            Self::ChoicePlaceholder => write!(f, "unresolved choice"),
            Self::Administrative => write!(f, "administrative entry"),
            Self::AboveClassLevel {
                required,
                class_level,
            } => write!(f, "requires level {} (class level {})", required, class_level),
            Self::AboveLevelCap { required, cap } => {
                write!(f, "requires level {} (cap {})", required, cap)
            }
            Self::Superseded { by } => write!(f, "superseded by {}", by),
            Self::MissingDefinition => write!(f, "missing item definition"),
            Self::Orphaned { container_id } => {
                write!(f, "unknown container {}", container_id)
            }
            Self::ContainerCycle => write!(f, "container cycle"),
        }
    }
}

/// One skipped input entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipRecord {
    pub key: String,
    pub reason: SkipReason,
}

impl SkipRecord {
    pub fn new(key: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key_and_reason() {
        let record = SkipRecord::new(
            "dagger",
            SkipReason::Subsumed {
                category: "simple-weapons".to_string(),
            },
        );
        assert_eq!(record.to_string(), "dagger: covered by simple-weapons");
    }
}
