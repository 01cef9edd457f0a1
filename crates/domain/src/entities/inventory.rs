//! Inventory with resolved container hierarchy and carried weight.
//!
//! The character service exports a flat item list; each item names the
//! container it sits in. Top-level items name the character itself.
//!
//! ```text
//! character (id 7)
//! ├── Backpack        container 7, multiplier 1
//! │   └── Rope        container = Backpack
//! └── Bag of Holding  container 7, multiplier 0
//!     └── Anvil       container = Bag of Holding, effective weight 0
//! ```

use serde::{Deserialize, Serialize};

use super::skip::SkipRecord;

/// Coins that weigh one pound.
pub const COINS_PER_POUND: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_weight: f64,
    /// Weight this item adds to the carried total after container rules.
    pub effective_weight: f64,
    pub container_id: i64,
    pub equipped: bool,
    pub is_container: bool,
    /// Present only for containers; scales the weight of their contents.
    pub weight_multiplier: Option<f64>,
    pub cost: Option<f64>,
}

impl InventoryItem {
    /// Unit weight times quantity, ignoring container rules.
    pub fn raw_weight(&self) -> f64 {
        self.unit_weight * f64::from(self.quantity)
    }

    /// A container whose contents weigh nothing.
    pub fn is_magic_container(&self) -> bool {
        self.is_container && self.weight_multiplier == Some(0.0)
    }
}

/// A container and everything directly inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerItem {
    pub item: InventoryItem,
    pub contents: Vec<InventoryItem>,
    /// Effective weight of the contents, nested containers included.
    pub contents_weight: f64,
    /// Container's own effective weight plus `contents_weight`.
    pub aggregate_weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResult {
    /// Every item reachable from the character, parents before contents.
    pub items: Vec<InventoryItem>,
    pub containers: Vec<ContainerItem>,
    pub item_weight: f64,
    pub coin_weight: f64,
    /// Weight handed to encumbrance: items plus counted coins.
    pub total_weight: f64,
    pub skipped: Vec<SkipRecord>,
}

impl InventoryResult {
    pub fn item(&self, id: i64) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn container(&self, id: i64) -> Option<&ContainerItem> {
        self.containers.iter().find(|c| c.item.id == id)
    }
}
