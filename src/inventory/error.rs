use thiserror::Error;

use crate::item::ItemKind;

/// Errors that can occur during inventory operations
///
/// All of these are expected outcomes of a player action; none of them
/// leave the inventory modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// More units requested than one slot of this kind can ever hold
    #[error("Cannot fit {quantity} {kind} in one slot (max stack size {max_stack_size})")]
    CapacityExceeded {
        kind: ItemKind,
        quantity: u32,
        max_stack_size: u32,
    },

    /// Slot already holds this kind but not enough room remains
    #[error("Slot {index} holds {count}/{max_stack_size} {kind}, no room for {quantity} more")]
    StackFull {
        index: usize,
        kind: ItemKind,
        count: u32,
        quantity: u32,
        max_stack_size: u32,
    },

    /// Slot holds a different item (direct placement only)
    #[error("Slot {index} is occupied by {occupant}")]
    SlotOccupiedByOtherItem { index: usize, occupant: ItemKind },

    /// No empty slot and no compatible stack with room
    #[error("Inventory is full")]
    InventoryFull,

    /// Slot index out of bounds
    #[error("Invalid slot index: {index} (capacity {capacity})")]
    InvalidIndex { index: usize, capacity: usize },

    /// Placement of zero units
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}
