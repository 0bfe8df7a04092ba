//! Inventory stock models.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::positive_whole_json_number;

/// A stock record for one pack configuration of a formulary medication.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    /// Medication name, must match a formulary entry
    pub name: String,
    /// Strength in mg
    #[serde(deserialize_with = "pack_number")]
    pub strength: u64,
    /// Units per pack
    #[serde(deserialize_with = "pack_number")]
    pub pack_size: u64,
    /// Number of packs held
    #[serde(deserialize_with = "pack_number")]
    pub total_packs: u64,
}

/// Stored counts may be written as integral floats (`500.0`, `1e1`).
fn pack_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    positive_whole_json_number(&number)
        .ok_or_else(|| D::Error::custom(format!("expected a positive whole number, got {}", number)))
}

/// Ordered list of stock records, in insertion order.
pub type Inventory = Vec<InventoryItem>;

/// Identity of a stock-keeping unit: two items with equal keys are the same stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackKey<'a> {
    pub name: &'a str,
    pub strength: u64,
    pub pack_size: u64,
}

impl InventoryItem {
    /// Create a new inventory item.
    pub fn new(name: impl Into<String>, strength: u64, pack_size: u64, total_packs: u64) -> Self {
        Self {
            name: name.into(),
            strength,
            pack_size,
            total_packs,
        }
    }

    /// The `(name, strength, pack_size)` merge key.
    pub fn key(&self) -> PackKey<'_> {
        PackKey {
            name: &self.name,
            strength: self.strength,
            pack_size: self.pack_size,
        }
    }

    /// Check if two items describe the same stock-keeping unit.
    pub fn same_pack(&self, other: &InventoryItem) -> bool {
        self.key() == other.key()
    }
}
