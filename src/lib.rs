//! Slot inventory prototype
//!
//! A player moves around a window and carries a fixed-size inventory. The
//! library holds everything that isn't drawing or event polling:
//!
//! - [`item`]: the static item catalog
//! - [`inventory`]: the slot store (placement rules, queries, starting loadout)
//! - [`player`]: the player entity that owns the inventory
//! - [`input`]: key bindings resolved to game actions
//! - [`config`]: JSON config file loading
//! - [`logging`]: logger setup
//!
//! The SDL2 front-end lives in the binary behind the `gui` feature.

pub mod config;
pub mod input;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod player;

pub use config::{ConfigError, GameConfig};
pub use input::{GameAction, InputBindings};
pub use inventory::{Inventory, InventoryError, PlacementStep};
pub use item::{ItemKind, ItemStack};
pub use player::{MovementInput, Player};
