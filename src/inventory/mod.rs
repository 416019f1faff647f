// Inventory system module
//
// This module provides the slot inventory store, including:
// - Fixed-capacity slot container with direct and automatic placement
// - Error type for refused placements
// - Starting loadout seeding

pub mod error;
pub mod inventory;
pub mod loadout;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{DumpEntry, Inventory};
pub use loadout::{default_loadout, seed_inventory, LoadoutReport, PlacementStep};
