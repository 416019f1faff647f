// Item system module
//
// This module provides the static item catalog, including:
// - The closed set of item kinds
// - One immutable definition per kind (name, max stack size)
// - Item stacks (a kind plus a count) as stored in inventory slots

pub mod definition;
pub mod kind;
pub mod stack;

// Re-export main types for convenient access
pub use definition::{definition_of, ItemDefinition};
pub use kind::{ItemKind, UnknownItemKind};
pub use stack::ItemStack;
