use super::kind::ItemKind;

/// An instance of an item with quantity
///
/// This is what an occupied inventory slot holds. Two stacks are "the same
/// item" when their kinds are equal; the definition is looked up, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemStack {
    /// Kind of item in the stack
    pub kind: ItemKind,

    /// How many of this item (1 to max_stack_size)
    pub count: u32,
}

impl ItemStack {
    /// Creates a new item stack
    pub fn new(kind: ItemKind, count: u32) -> Self {
        ItemStack { kind, count }
    }

    /// Maximum count for this stack's kind
    pub fn max_stack_size(&self) -> u32 {
        self.kind.max_stack_size()
    }

    /// How many more units fit before the stack is full
    pub fn room(&self) -> u32 {
        self.max_stack_size().saturating_sub(self.count)
    }

    /// Returns true if `quantity` more units fit in this stack in one go
    pub fn can_absorb(&self, quantity: u32) -> bool {
        quantity <= self.room()
    }

    /// Returns true if this stack holds `kind` and can take `quantity` more
    pub fn accepts(&self, kind: ItemKind, quantity: u32) -> bool {
        self.kind == kind && self.can_absorb(quantity)
    }
}
