//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, independent of the
//! player's position. They use SDL2 primitives and the bitmap font.
//!
//! # Available Components
//!
//! - [`InventoryUI`] - Toggleable inventory grid

pub mod inventory_ui;

pub use inventory_ui::InventoryUI;
