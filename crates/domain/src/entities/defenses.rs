use serde::{Deserialize, Serialize};

/// Damage and condition defenses, deduplicated display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defenses {
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,
    pub vulnerabilities: Vec<String>,
}

impl Defenses {
    pub fn is_empty(&self) -> bool {
        self.resistances.is_empty() && self.immunities.is_empty() && self.vulnerabilities.is_empty()
    }
}
