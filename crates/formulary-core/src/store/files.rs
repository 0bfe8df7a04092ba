//! Formulary and inventory file operations.

use super::{load_collection, write_collection, DataStore, StoreResult};
use crate::models::{Formulary, Inventory, InventoryItem};
use crate::validation::{formulary_validator, inventory_validator};

impl DataStore {
    /// Load the formulary, creating an empty file if none exists.
    pub fn load_formulary(&self) -> StoreResult<Formulary> {
        load_collection(&self.formulary_path, formulary_validator)
    }

    /// Load the inventory, checking every item against `formulary`.
    pub fn load_inventory(&self, formulary: &[String]) -> StoreResult<Inventory> {
        load_collection::<InventoryItem, _>(&self.inventory_path, inventory_validator(formulary))
    }

    /// Rewrite the formulary file from the in-memory collection.
    pub fn write_formulary(&self, formulary: &[String]) -> StoreResult<()> {
        write_collection(&self.formulary_path, formulary)
    }

    /// Rewrite the inventory file from the in-memory collection.
    pub fn write_inventory(&self, inventory: &[InventoryItem]) -> StoreResult<()> {
        write_collection(&self.inventory_path, inventory)
    }
}
