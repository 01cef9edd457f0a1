//! Modifier classification shared by the record index and resolved entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The part of the character that granted a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierSource {
    Race,
    Class,
    Background,
    Feat,
    Item,
}

impl ModifierSource {
    pub const ALL: [ModifierSource; 5] = [
        ModifierSource::Race,
        ModifierSource::Class,
        ModifierSource::Background,
        ModifierSource::Feat,
        ModifierSource::Item,
    ];
}

impl fmt::Display for ModifierSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Race => write!(f, "race"),
            Self::Class => write!(f, "class"),
            Self::Background => write!(f, "background"),
            Self::Feat => write!(f, "feat"),
            Self::Item => write!(f, "item"),
        }
    }
}

/// What a modifier does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierKind {
    Bonus,
    Proficiency,
    Expertise,
    HalfProficiency,
    Language,
    Resistance,
    Immunity,
    Vulnerability,
    Set,
    /// Any modifier type the pipeline does not interpret
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bonus => write!(f, "bonus"),
            Self::Proficiency => write!(f, "proficiency"),
            Self::Expertise => write!(f, "expertise"),
            Self::HalfProficiency => write!(f, "half-proficiency"),
            Self::Language => write!(f, "language"),
            Self::Resistance => write!(f, "resistance"),
            Self::Immunity => write!(f, "immunity"),
            Self::Vulnerability => write!(f, "vulnerability"),
            Self::Set => write!(f, "set"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for ModifierKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bonus" => Ok(Self::Bonus),
            "proficiency" => Ok(Self::Proficiency),
            "expertise" => Ok(Self::Expertise),
            "half-proficiency" => Ok(Self::HalfProficiency),
            "language" => Ok(Self::Language),
            "resistance" => Ok(Self::Resistance),
            "immunity" => Ok(Self::Immunity),
            "vulnerability" => Ok(Self::Vulnerability),
            "set" => Ok(Self::Set),
            _ => Ok(Self::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("bonus".parse(), Ok(ModifierKind::Bonus));
        assert_eq!("Half-Proficiency".parse(), Ok(ModifierKind::HalfProficiency));
        assert_eq!("language".parse(), Ok(ModifierKind::Language));
    }

    #[test]
    fn unknown_kinds_are_kept_as_unknown() {
        assert_eq!("ignore".parse(), Ok(ModifierKind::Unknown));
        assert_eq!("".parse(), Ok(ModifierKind::Unknown));
    }
}
