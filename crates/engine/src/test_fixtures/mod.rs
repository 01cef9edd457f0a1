//! Test fixtures loader for JSON character exports.
//!
//! Fixtures live in the `test_data/` directory of this crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::characters;
//!
//! #[test]
//! fn cleric_has_slots() {
//!     let record = characters::dwarf_cleric();
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

use sheetforge_domain::CharacterRecord;

// =============================================================================
// Fixture Loading
// =============================================================================

fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Read a fixture file as text.
///
/// # Panics
///
/// Panics if the fixture file cannot be read.
pub fn load_fixture_text(path: &str) -> String {
    let fixture_path = fixture_path(path);
    std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let content = load_fixture_text(path);
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path(path).display(),
            e
        )
    })
}

/// Load a fixture and return Option instead of panicking.
pub fn try_load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let content = std::fs::read_to_string(fixture_path(path)).ok()?;
    serde_json::from_str(&content).ok()
}

// =============================================================================
// Character Fixtures
// =============================================================================

/// Character export fixtures.
pub mod characters {
    use super::*;

    pub const DWARF_CLERIC: &str = "characters/dwarf_cleric.json";
    pub const MULTICLASS_CASTER: &str = "characters/multiclass_caster.json";
    pub const MISSING_CLASSES: &str = "characters/missing_classes.json";
    pub const SPARSE: &str = "characters/sparse.json";

    /// Load the level 5 cleric (Thora Stonehelm).
    ///
    /// - Race: Hill Dwarf
    /// - Class: Cleric 5 (Life Domain)
    /// - Simple weapons plus dwarven weapon training
    /// - Backpack and a Bag of Holding holding an anvil
    pub fn dwarf_cleric() -> CharacterRecord {
        load_fixture(DWARF_CLERIC)
    }

    /// Load the level 18 multiclass (Korrin Thundersky).
    ///
    /// - Race: Goliath (Powerful Build)
    /// - Classes: Ranger 6 (Hunter), Rogue 9 (Arcane Trickster), Warlock 3 (The Fiend)
    /// - Charisma override, expertise in Stealth, a pending language choice
    /// - One orphaned item and one item without a definition
    pub fn multiclass_caster() -> CharacterRecord {
        load_fixture(MULTICLASS_CASTER)
    }

    /// A record with no class list at all.
    pub fn missing_classes() -> CharacterRecord {
        load_fixture(MISSING_CLASSES)
    }

    /// A level 1 fighter with nothing but its class.
    pub fn sparse() -> CharacterRecord {
        load_fixture(SPARSE)
    }

    /// Every fixture that resolves successfully.
    pub fn all() -> Vec<CharacterRecord> {
        vec![dwarf_cleric(), multiclass_caster(), sparse()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_character_fixtures_parse() {
        let records = characters::all();
        assert_eq!(records.len(), 3);
        assert!(characters::missing_classes().classes.is_none());
    }

    #[test]
    fn missing_fixture_returns_none() {
        assert!(try_load_fixture::<CharacterRecord>("characters/nope.json").is_none());
    }
}
