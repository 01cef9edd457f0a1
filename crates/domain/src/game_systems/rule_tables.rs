//! Fixed lookup tables used by the resolvers.
//!
//! Built once per process and only read afterwards. Keys are the
//! hyphenated modifier subtypes the character service emits
//! (`crossbow-light`, `thieves-tools`, `deep-speech`).

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::dnd5e::SKILLS;
use crate::entities::{FeatureCategory, ProficiencyCategory};

static SHARED_RULES: OnceLock<RuleTables> = OnceLock::new();

/// Simple or martial weapon grouping used for category subsumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponTier {
    Simple,
    Martial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProficiencyDefinition {
    pub display_name: &'static str,
    pub category: ProficiencyCategory,
    /// Tier of a specific weapon, or the tier a category grant covers.
    pub weapon_tier: Option<WeaponTier>,
    /// `simple-weapons` and `martial-weapons`.
    pub is_category_grant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FeatureOverride {
    class: Option<&'static str>,
    name: &'static str,
    category: FeatureCategory,
}

const SIMPLE_WEAPONS: &[(&str, &str)] = &[
    ("club", "Club"),
    ("dagger", "Dagger"),
    ("greatclub", "Greatclub"),
    ("handaxe", "Handaxe"),
    ("javelin", "Javelin"),
    ("light-hammer", "Light Hammer"),
    ("mace", "Mace"),
    ("quarterstaff", "Quarterstaff"),
    ("sickle", "Sickle"),
    ("spear", "Spear"),
    ("crossbow-light", "Light Crossbow"),
    ("dart", "Dart"),
    ("shortbow", "Shortbow"),
    ("sling", "Sling"),
];

const MARTIAL_WEAPONS: &[(&str, &str)] = &[
    ("battleaxe", "Battleaxe"),
    ("flail", "Flail"),
    ("glaive", "Glaive"),
    ("greataxe", "Greataxe"),
    ("greatsword", "Greatsword"),
    ("halberd", "Halberd"),
    ("lance", "Lance"),
    ("longsword", "Longsword"),
    ("maul", "Maul"),
    ("morningstar", "Morningstar"),
    ("pike", "Pike"),
    ("rapier", "Rapier"),
    ("scimitar", "Scimitar"),
    ("shortsword", "Shortsword"),
    ("trident", "Trident"),
    ("war-pick", "War Pick"),
    ("warhammer", "Warhammer"),
    ("whip", "Whip"),
    ("blowgun", "Blowgun"),
    ("crossbow-hand", "Hand Crossbow"),
    ("crossbow-heavy", "Heavy Crossbow"),
    ("longbow", "Longbow"),
    ("net", "Net"),
];

/// Alternate spellings the service uses, mapped to the table key.
const PROFICIENCY_ALIASES: &[(&str, &str)] = &[
    ("light-crossbow", "crossbow-light"),
    ("hand-crossbow", "crossbow-hand"),
    ("heavy-crossbow", "crossbow-heavy"),
];

const ARMOR: &[(&str, &str)] = &[
    ("light-armor", "Light Armor"),
    ("medium-armor", "Medium Armor"),
    ("heavy-armor", "Heavy Armor"),
    ("shields", "Shields"),
];

const TOOLS: &[(&str, &str)] = &[
    ("thieves-tools", "Thieves' Tools"),
    ("alchemists-supplies", "Alchemist's Supplies"),
    ("brewers-supplies", "Brewer's Supplies"),
    ("calligraphers-supplies", "Calligrapher's Supplies"),
    ("carpenters-tools", "Carpenter's Tools"),
    ("cartographers-tools", "Cartographer's Tools"),
    ("cobblers-tools", "Cobbler's Tools"),
    ("cooks-utensils", "Cook's Utensils"),
    ("glassblowers-tools", "Glassblower's Tools"),
    ("jewelers-tools", "Jeweler's Tools"),
    ("leatherworkers-tools", "Leatherworker's Tools"),
    ("masons-tools", "Mason's Tools"),
    ("painters-supplies", "Painter's Supplies"),
    ("potters-tools", "Potter's Tools"),
    ("smiths-tools", "Smith's Tools"),
    ("tinkers-tools", "Tinker's Tools"),
    ("weavers-tools", "Weaver's Tools"),
    ("woodcarvers-tools", "Woodcarver's Tools"),
    ("disguise-kit", "Disguise Kit"),
    ("forgery-kit", "Forgery Kit"),
    ("herbalism-kit", "Herbalism Kit"),
    ("navigators-tools", "Navigator's Tools"),
    ("poisoners-kit", "Poisoner's Kit"),
    ("dice-set", "Dice Set"),
    ("playing-card-set", "Playing Card Set"),
    ("dragonchess-set", "Dragonchess Set"),
    ("three-dragon-ante-set", "Three-Dragon Ante Set"),
    ("bagpipes", "Bagpipes"),
    ("drum", "Drum"),
    ("dulcimer", "Dulcimer"),
    ("flute", "Flute"),
    ("horn", "Horn"),
    ("lute", "Lute"),
    ("lyre", "Lyre"),
    ("pan-flute", "Pan Flute"),
    ("shawm", "Shawm"),
    ("viol", "Viol"),
    ("vehicles-land", "Vehicles (Land)"),
    ("vehicles-water", "Vehicles (Water)"),
];

// Only names that title-casing the subtype would get wrong, plus the
// standard and exotic languages for completeness.
const LANGUAGES: &[(&str, &str)] = &[
    ("common", "Common"),
    ("dwarvish", "Dwarvish"),
    ("elvish", "Elvish"),
    ("giant", "Giant"),
    ("gnomish", "Gnomish"),
    ("goblin", "Goblin"),
    ("halfling", "Halfling"),
    ("orc", "Orc"),
    ("abyssal", "Abyssal"),
    ("celestial", "Celestial"),
    ("draconic", "Draconic"),
    ("deep-speech", "Deep Speech"),
    ("infernal", "Infernal"),
    ("primordial", "Primordial"),
    ("sylvan", "Sylvan"),
    ("undercommon", "Undercommon"),
    ("thieves-cant", "Thieves' Cant"),
    ("druidic", "Druidic"),
    ("gith", "Gith"),
    ("giant-eagle", "Giant Eagle"),
    ("sign-language", "Sign Language"),
];

const EXCLUDED_FEATURE_SUBSTRINGS: &[&str] = &[
    "ability score improvement",
    "ability score increase",
    "hit points",
    "starting equipment",
    "core artificer traits",
    "core barbarian traits",
    "core bard traits",
    "core cleric traits",
    "core druid traits",
    "core fighter traits",
    "core monk traits",
    "core paladin traits",
    "core ranger traits",
    "core rogue traits",
    "core sorcerer traits",
    "core warlock traits",
    "core wizard traits",
];

const ADMINISTRATIVE_RACIAL_TRAITS: &[&str] = &[
    "ability score increase",
    "ability score increases",
    "age",
    "alignment",
    "size",
    "speed",
    "languages",
    "creature type",
];

const POWERFUL_BUILD_TRAITS: &[&str] = &["powerful build", "hippo build", "little giant"];

const SPELL_LESS_MARKERS: &[&str] = &["spell-less", "spellless"];

fn overrides() -> Vec<FeatureOverride> {
    use FeatureCategory::*;
    let entry = |class, name, category| FeatureOverride {
        class,
        name,
        category,
    };
    vec![
        entry(Some("barbarian"), "rage", Resource),
        entry(Some("barbarian"), "reckless attack", Active),
        entry(Some("barbarian"), "unarmored defense", Passive),
        entry(Some("bard"), "bardic inspiration", Resource),
        entry(Some("cleric"), "channel divinity", Resource),
        entry(Some("paladin"), "channel divinity", Resource),
        entry(Some("paladin"), "divine smite", Active),
        entry(Some("paladin"), "lay on hands", Resource),
        entry(Some("druid"), "wild shape", Resource),
        entry(Some("fighter"), "second wind", Resource),
        entry(Some("fighter"), "action surge", Resource),
        entry(Some("fighter"), "indomitable", Resource),
        entry(Some("monk"), "ki", Resource),
        entry(Some("monk"), "unarmored defense", Passive),
        entry(Some("rogue"), "cunning action", Active),
        entry(Some("rogue"), "sneak attack", Passive),
        entry(Some("rogue"), "uncanny dodge", Active),
        entry(Some("sorcerer"), "font of magic", Resource),
        entry(Some("warlock"), "pact magic", Spell),
        entry(Some("warlock"), "eldritch invocations", Passive),
        entry(Some("wizard"), "arcane recovery", Resource),
        entry(None, "extra attack", Passive),
        entry(None, "fighting style", Passive),
        entry(None, "evasion", Passive),
        entry(None, "relentless endurance", Resource),
        entry(None, "breath weapon", Active),
    ]
}

/// Read-only rule dictionaries shared by every resolution.
#[derive(Debug, Clone)]
pub struct RuleTables {
    proficiencies: HashMap<&'static str, ProficiencyDefinition>,
    languages: HashMap<&'static str, &'static str>,
    skill_slugs: HashSet<&'static str>,
    feature_overrides: Vec<FeatureOverride>,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::dnd5e()
    }
}

impl RuleTables {
    /// Process-wide tables, built on first use.
    pub fn shared() -> &'static RuleTables {
        SHARED_RULES.get_or_init(RuleTables::dnd5e)
    }

    pub fn dnd5e() -> Self {
        let mut proficiencies = HashMap::new();
        let weapon = |display_name, tier| ProficiencyDefinition {
            display_name,
            category: ProficiencyCategory::Weapon,
            weapon_tier: Some(tier),
            is_category_grant: false,
        };
        for &(key, name) in SIMPLE_WEAPONS {
            proficiencies.insert(key, weapon(name, WeaponTier::Simple));
        }
        for &(key, name) in MARTIAL_WEAPONS {
            proficiencies.insert(key, weapon(name, WeaponTier::Martial));
        }
        proficiencies.insert(
            "simple-weapons",
            ProficiencyDefinition {
                is_category_grant: true,
                ..weapon("Simple Weapons", WeaponTier::Simple)
            },
        );
        proficiencies.insert(
            "martial-weapons",
            ProficiencyDefinition {
                is_category_grant: true,
                ..weapon("Martial Weapons", WeaponTier::Martial)
            },
        );
        for (table, category) in [
            (ARMOR, ProficiencyCategory::Armor),
            (TOOLS, ProficiencyCategory::Tool),
        ] {
            for &(key, display_name) in table {
                proficiencies.insert(
                    key,
                    ProficiencyDefinition {
                        display_name,
                        category,
                        weapon_tier: None,
                        is_category_grant: false,
                    },
                );
            }
        }

        Self {
            proficiencies,
            languages: LANGUAGES.iter().copied().collect(),
            skill_slugs: SKILLS.iter().map(|s| s.slug).collect(),
            feature_overrides: overrides(),
        }
    }

    pub fn proficiency(&self, subtype: &str) -> Option<&ProficiencyDefinition> {
        self.proficiencies
            .get(self.canonical_proficiency_key(subtype).as_str())
    }

    /// Lowercased subtype with alternate spellings folded onto one key.
    pub fn canonical_proficiency_key(&self, subtype: &str) -> String {
        let key = normalize(subtype);
        PROFICIENCY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map_or(key, |(_, canonical)| (*canonical).to_string())
    }

    pub fn is_skill(&self, subtype: &str) -> bool {
        self.skill_slugs.contains(normalize(subtype).as_str())
    }

    /// An unresolved "pick one" entry rather than a concrete grant.
    pub fn is_choice_placeholder(&self, subtype: &str) -> bool {
        let subtype = normalize(subtype);
        subtype.starts_with("choose")
            || subtype.contains("of-your-choice")
            || subtype.ends_with("-choice")
    }

    /// Display name for a language subtype, title-casing unknown ids.
    pub fn language_name(&self, subtype: &str) -> String {
        let key = normalize(subtype);
        match self.languages.get(key.as_str()) {
            Some(name) => (*name).to_string(),
            None => title_case(&key),
        }
    }

    /// Administrative class entries, matched by substring.
    pub fn is_excluded_feature(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        EXCLUDED_FEATURE_SUBSTRINGS.iter().any(|s| name.contains(s))
    }

    /// Administrative racial entries, matched by exact name.
    pub fn is_administrative_racial_trait(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        ADMINISTRATIVE_RACIAL_TRAITS.contains(&name.as_str())
    }

    pub fn is_powerful_build(&self, trait_name: &str) -> bool {
        let name = trait_name.trim().to_lowercase();
        POWERFUL_BUILD_TRAITS.contains(&name.as_str())
    }

    pub fn is_spell_less(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        SPELL_LESS_MARKERS.iter().any(|m| name.contains(m))
    }

    /// Explicit category for a feature, class-specific entries first.
    pub fn feature_override(&self, class: Option<&str>, name: &str) -> Option<FeatureCategory> {
        let name = name.trim().to_lowercase();
        let class = class.map(|c| c.trim().to_lowercase());
        let matching = |o: &&FeatureOverride| o.name == name;
        self.feature_overrides
            .iter()
            .filter(matching)
            .find(|o| o.class.is_some() && o.class == class.as_deref())
            .or_else(|| {
                self.feature_overrides
                    .iter()
                    .filter(matching)
                    .find(|o| o.class.is_none())
            })
            .map(|o| o.category)
    }

    /// Override table first, then keyword heuristics over name and text.
    pub fn classify_feature(
        &self,
        class: Option<&str>,
        name: &str,
        description: &str,
    ) -> FeatureCategory {
        if let Some(category) = self.feature_override(class, name) {
            return category;
        }
        let name = name.to_lowercase();
        if name.contains("spellcasting") || name.contains("spell") || name.contains("pact magic") {
            return FeatureCategory::Spell;
        }
        let text = description.to_lowercase();
        if text.contains("short rest") || text.contains("long rest") || text.contains("regain") {
            return FeatureCategory::Resource;
        }
        if text.contains("bonus action")
            || text.contains("as an action")
            || text.contains("use your action")
            || text.contains("your reaction")
            || text.contains("as a reaction")
        {
            return FeatureCategory::Active;
        }
        FeatureCategory::Passive
    }
}

fn normalize(subtype: &str) -> String {
    subtype.trim().to_lowercase()
}

/// `deep-speech` → `Deep Speech`.
pub fn title_case(id: &str) -> String {
    id.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_entries_carry_tier() {
        let rules = RuleTables::shared();
        let dagger = rules.proficiency("dagger").expect("dagger mapped");
        assert_eq!(dagger.weapon_tier, Some(WeaponTier::Simple));
        assert!(!dagger.is_category_grant);

        let simple = rules.proficiency("simple-weapons").expect("category mapped");
        assert!(simple.is_category_grant);
        assert_eq!(simple.weapon_tier, Some(WeaponTier::Simple));

        let longsword = rules.proficiency("longsword").expect("longsword mapped");
        assert_eq!(longsword.weapon_tier, Some(WeaponTier::Martial));
    }

    #[test]
    fn crossbow_spellings_share_one_key() {
        let rules = RuleTables::shared();
        assert_eq!(rules.canonical_proficiency_key("Light-Crossbow"), "crossbow-light");
        assert_eq!(rules.canonical_proficiency_key("hand-crossbow"), "crossbow-hand");
        assert_eq!(rules.canonical_proficiency_key("dagger"), "dagger");
        let heavy = rules.proficiency("heavy-crossbow").expect("alias mapped");
        assert_eq!(heavy.display_name, "Heavy Crossbow");
        assert_eq!(heavy.weapon_tier, Some(WeaponTier::Martial));
    }

    #[test]
    fn armor_and_tools_have_no_tier() {
        let rules = RuleTables::shared();
        let shields = rules.proficiency("shields").expect("shields mapped");
        assert_eq!(shields.category, ProficiencyCategory::Armor);
        assert_eq!(shields.weapon_tier, None);

        let tools = rules.proficiency("thieves-tools").expect("tools mapped");
        assert_eq!(tools.category, ProficiencyCategory::Tool);
        assert_eq!(tools.display_name, "Thieves' Tools");
        assert!(rules.proficiency("laser-rifle").is_none());
    }

    #[test]
    fn recognizes_skills_and_choices() {
        let rules = RuleTables::shared();
        assert!(rules.is_skill("sleight-of-hand"));
        assert!(!rules.is_skill("dagger"));
        assert!(rules.is_choice_placeholder("choose-a-language"));
        assert!(rules.is_choice_placeholder("one-language-of-your-choice"));
        assert!(!rules.is_choice_placeholder("elvish"));
    }

    #[test]
    fn language_names_fall_back_to_title_case() {
        let rules = RuleTables::shared();
        assert_eq!(rules.language_name("deep-speech"), "Deep Speech");
        assert_eq!(rules.language_name("thieves-cant"), "Thieves' Cant");
        assert_eq!(rules.language_name("old-high-elven"), "Old High Elven");
    }

    #[test]
    fn administrative_names() {
        let rules = RuleTables::shared();
        assert!(rules.is_excluded_feature("Core Sorcerer Traits"));
        assert!(rules.is_excluded_feature("Ability Score Improvement"));
        assert!(!rules.is_excluded_feature("Sneak Attack"));

        assert!(rules.is_administrative_racial_trait("Speed"));
        // Exact match only
        assert!(!rules.is_administrative_racial_trait("Fleet of Foot Speed"));
    }

    #[test]
    fn overrides_prefer_class_specific_entries() {
        let rules = RuleTables::shared();
        assert_eq!(
            rules.feature_override(Some("Fighter"), "Second Wind"),
            Some(FeatureCategory::Resource)
        );
        assert_eq!(
            rules.feature_override(Some("Fighter"), "Extra Attack"),
            Some(FeatureCategory::Passive)
        );
        assert_eq!(rules.feature_override(Some("Wizard"), "Second Wind"), None);
    }

    #[test]
    fn classification_heuristics() {
        let rules = RuleTables::shared();
        assert_eq!(
            rules.classify_feature(Some("Wizard"), "Spellcasting", ""),
            FeatureCategory::Spell
        );
        assert_eq!(
            rules.classify_feature(None, "Fey Step", "Once used, you regain it after a short rest."),
            FeatureCategory::Resource
        );
        assert_eq!(
            rules.classify_feature(None, "Nimble Escape", "You can take the Disengage action as a bonus action."),
            FeatureCategory::Active
        );
        assert_eq!(
            rules.classify_feature(None, "Darkvision", "You can see in dim light."),
            FeatureCategory::Passive
        );
    }

    #[test]
    fn powerful_build_and_spell_less() {
        let rules = RuleTables::shared();
        assert!(rules.is_powerful_build("Powerful Build"));
        assert!(rules.is_powerful_build("Little Giant"));
        assert!(!rules.is_powerful_build("Stone's Endurance"));
        assert!(rules.is_spell_less("Ranger (Spell-less)"));
        assert!(!rules.is_spell_less("Hunter"));
    }

    #[test]
    fn title_case_splits_on_hyphens() {
        assert_eq!(title_case("giant-eagle"), "Giant Eagle");
        assert_eq!(title_case(""), "");
    }
}
