use std::fmt;

use super::error::InventoryError;
use crate::item::{ItemKind, ItemStack};

/// One occupied slot, as listed by [`Inventory::debug_dump`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpEntry {
    pub index: usize,
    pub name: &'static str,
    pub count: u32,
}

/// Fixed-capacity inventory container with indexed slots
///
/// This is the core storage structure owned by the player. Each slot is
/// either empty (`None`) or holds one stack of a single kind with
/// `1 <= count <= max_stack_size`. The slot array is allocated once and
/// never grows or shrinks.
///
/// Every mutating operation is all-or-nothing: on `Err` the slots are
/// exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Slots that can hold item stacks (None = empty)
    slots: Box<[Option<ItemStack>]>,
}

impl Inventory {
    /// Creates a new empty inventory with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Inventory {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Returns true if all slots are occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Counts how many of a specific item are in the inventory, across all slots
    pub fn count_item(&self, kind: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.kind == kind)
            .map(|stack| stack.count)
            .sum()
    }

    fn invalid_index(&self, index: usize) -> InventoryError {
        InventoryError::InvalidIndex {
            index,
            capacity: self.capacity(),
        }
    }

    /// Gets the contents of a slot
    ///
    /// Returns `Ok(None)` for an empty slot. An index outside
    /// `0..capacity()` is an `InvalidIndex` error rather than an empty result.
    pub fn slot_at(&self, slot_index: usize) -> Result<Option<ItemStack>, InventoryError> {
        self.slots
            .get(slot_index)
            .copied()
            .ok_or_else(|| self.invalid_index(slot_index))
    }

    /// Gets the kind of item in a slot, if any
    pub fn item_at(&self, slot_index: usize) -> Result<Option<ItemKind>, InventoryError> {
        Ok(self.slot_at(slot_index)?.map(|stack| stack.kind))
    }

    /// Iterates over every slot in index order, empty ones included
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<ItemStack>)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Places items in a specific slot
    ///
    /// - Empty slot: takes the items if `quantity` fits in one stack.
    /// - Same item: tops up the stack if the whole `quantity` fits.
    /// - Different item: refused.
    pub fn place_at(
        &mut self,
        slot_index: usize,
        kind: ItemKind,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(InventoryError::InvalidIndex { index: slot_index, capacity })?;

        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let max_stack_size = kind.max_stack_size();

        match slot {
            None => {
                if quantity > max_stack_size {
                    return Err(InventoryError::CapacityExceeded {
                        kind,
                        quantity,
                        max_stack_size,
                    });
                }
                *slot = Some(ItemStack::new(kind, quantity));
            }
            Some(stack) if stack.kind == kind => {
                if !stack.can_absorb(quantity) {
                    return Err(InventoryError::StackFull {
                        index: slot_index,
                        kind,
                        count: stack.count,
                        quantity,
                        max_stack_size,
                    });
                }
                stack.count += quantity;
            }
            Some(stack) => {
                return Err(InventoryError::SlotOccupiedByOtherItem {
                    index: slot_index,
                    occupant: stack.kind,
                });
            }
        }

        Ok(())
    }

    /// Adds items to the inventory, choosing the slot automatically
    ///
    /// Returns the index of the slot the items landed in.
    ///
    /// # Strategy
    /// 1. Scan slots in order, remembering the first empty one
    /// 2. The first stack of the same kind that can take the whole
    ///    `quantity` gets it, and the scan stops there
    /// 3. Otherwise start a new stack in the first empty slot
    ///
    /// A quantity is never split across slots. A stack further along wins
    /// over an earlier empty slot.
    pub fn place(&mut self, kind: ItemKind, quantity: u32) -> Result<usize, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let mut first_empty = None;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            match slot {
                None => {
                    first_empty.get_or_insert(index);
                }
                Some(stack) if stack.accepts(kind, quantity) => {
                    stack.count += quantity;
                    return Ok(index);
                }
                Some(_) => {}
            }
        }

        let index = first_empty.ok_or(InventoryError::InventoryFull)?;

        let max_stack_size = kind.max_stack_size();
        if quantity > max_stack_size {
            return Err(InventoryError::CapacityExceeded {
                kind,
                quantity,
                max_stack_size,
            });
        }

        self.slots[index] = Some(ItemStack::new(kind, quantity));
        Ok(index)
    }

    /// Lists every occupied slot as (index, name, count), lowest index first
    pub fn debug_dump(&self) -> Vec<DumpEntry> {
        self.slots()
            .filter_map(|(index, slot)| {
                slot.map(|stack| DumpEntry {
                    index,
                    name: stack.kind.name(),
                    count: stack.count,
                })
            })
            .collect()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for entry in self.debug_dump() {
            writeln!(f, "\t{}: {} ({}),", entry.index, entry.name, entry.count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 25;

    /// Checks the per-slot invariant on every slot
    fn assert_slots_valid(inventory: &Inventory) {
        for (index, slot) in inventory.slots() {
            if let Some(stack) = slot {
                assert!(
                    stack.count >= 1 && stack.count <= stack.max_stack_size(),
                    "slot {} holds {} {}",
                    index,
                    stack.count,
                    stack.kind
                );
            }
        }
    }

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::new(CAPACITY);
        assert_eq!(inventory.capacity(), CAPACITY);
        assert!(inventory.is_empty());
        assert!(!inventory.is_full());
        assert!(inventory.debug_dump().is_empty());
    }

    #[test]
    fn test_place_at_empty_slot() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(4, ItemKind::Food, 10).unwrap();

        assert_eq!(inventory.slot_at(4), Ok(Some(ItemStack::new(ItemKind::Food, 10))));
        assert_eq!(inventory.item_at(4), Ok(Some(ItemKind::Food)));
        assert_eq!(inventory.slot_at(3), Ok(None));
        assert_slots_valid(&inventory);
    }

    #[test]
    fn test_place_at_empty_slot_over_max() {
        let mut inventory = Inventory::new(CAPACITY);
        let result = inventory.place_at(0, ItemKind::Food, 65);

        assert_eq!(
            result,
            Err(InventoryError::CapacityExceeded {
                kind: ItemKind::Food,
                quantity: 65,
                max_stack_size: 64,
            })
        );
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_place_at_stacks_same_item() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(1, ItemKind::Food, 30).unwrap();
        inventory.place_at(1, ItemKind::Food, 4).unwrap();

        assert_eq!(inventory.slot_at(1).unwrap().map(|s| s.count), Some(34));
    }

    #[test]
    fn test_place_at_fill_to_capacity_boundary() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Food, 50).unwrap();

        // Exactly the remaining room brings it to max
        inventory.place_at(0, ItemKind::Food, 14).unwrap();
        assert_eq!(inventory.slot_at(0).unwrap().map(|s| s.count), Some(64));

        // One more is refused
        let before = inventory.clone();
        assert_eq!(
            inventory.place_at(0, ItemKind::Food, 1),
            Err(InventoryError::StackFull {
                index: 0,
                kind: ItemKind::Food,
                count: 64,
                quantity: 1,
                max_stack_size: 64,
            })
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_place_at_non_stackable_twice() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Sword, 1).unwrap();

        let result = inventory.place_at(0, ItemKind::Sword, 1);
        assert!(matches!(result, Err(InventoryError::StackFull { index: 0, count: 1, .. })));
        assert_eq!(inventory.slot_at(0).unwrap().map(|s| s.count), Some(1));
    }

    #[test]
    fn test_place_at_other_item_is_refused() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(2, ItemKind::Shield, 1).unwrap();
        let before = inventory.clone();

        assert_eq!(
            inventory.place_at(2, ItemKind::Food, 1),
            Err(InventoryError::SlotOccupiedByOtherItem {
                index: 2,
                occupant: ItemKind::Shield,
            })
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_place_at_invalid_index() {
        let mut inventory = Inventory::new(CAPACITY);

        assert_eq!(
            inventory.place_at(CAPACITY, ItemKind::Food, 1),
            Err(InventoryError::InvalidIndex { index: CAPACITY, capacity: CAPACITY })
        );
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_refused() {
        let mut inventory = Inventory::new(CAPACITY);

        assert_eq!(inventory.place_at(0, ItemKind::Food, 0), Err(InventoryError::ZeroQuantity));
        assert_eq!(inventory.place(ItemKind::Food, 0), Err(InventoryError::ZeroQuantity));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_place_at_huge_quantity_does_not_overflow() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Food, 10).unwrap();

        let result = inventory.place_at(0, ItemKind::Food, u32::MAX);
        assert!(matches!(result, Err(InventoryError::StackFull { .. })));
        assert_eq!(inventory.count_item(ItemKind::Food), 10);
    }

    #[test]
    fn test_slot_at_out_of_range() {
        let inventory = Inventory::new(CAPACITY);

        assert_eq!(
            inventory.slot_at(100),
            Err(InventoryError::InvalidIndex { index: 100, capacity: CAPACITY })
        );
        assert!(inventory.item_at(CAPACITY).is_err());
    }

    #[test]
    fn test_slot_at_is_idempotent() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(3, ItemKind::Food, 7).unwrap();
        let before = inventory.clone();

        let first = inventory.slot_at(3);
        for _ in 0..10 {
            assert_eq!(inventory.slot_at(3), first);
        }
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_place_uses_first_empty_slot() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Sword, 1).unwrap();

        assert_eq!(inventory.place(ItemKind::Shield, 1), Ok(1));
        assert_eq!(inventory.item_at(1), Ok(Some(ItemKind::Shield)));
    }

    #[test]
    fn test_place_prefers_existing_stack_over_empty_slot() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(2, ItemKind::Food, 10).unwrap();

        assert_eq!(inventory.place(ItemKind::Food, 5), Ok(2));
        assert_eq!(inventory.slot_at(2).unwrap().map(|s| s.count), Some(15));
        assert_eq!(inventory.slot_at(0), Ok(None));
        assert_slots_valid(&inventory);
    }

    #[test]
    fn test_place_takes_first_stack_that_fits_whole_quantity() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Food, 62).unwrap();
        inventory.place_at(1, ItemKind::Food, 40).unwrap();
        inventory.place_at(2, ItemKind::Food, 1).unwrap();

        // Slot 0 only has room for 2, slot 1 has room for 24
        assert_eq!(inventory.place(ItemKind::Food, 10), Ok(1));
        assert_eq!(inventory.slot_at(0).unwrap().map(|s| s.count), Some(62));
        assert_eq!(inventory.slot_at(1).unwrap().map(|s| s.count), Some(50));
        assert_eq!(inventory.slot_at(2).unwrap().map(|s| s.count), Some(1));
    }

    #[test]
    fn test_place_does_not_split_into_partial_stack() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Food, 60).unwrap();

        // 10 doesn't fit in slot 0, so a fresh stack starts in slot 1
        assert_eq!(inventory.place(ItemKind::Food, 10), Ok(1));
        assert_eq!(inventory.slot_at(0).unwrap().map(|s| s.count), Some(60));
        assert_eq!(inventory.slot_at(1).unwrap().map(|s| s.count), Some(10));
        assert_eq!(inventory.count_item(ItemKind::Food), 70);
    }

    #[test]
    fn test_place_later_stack_beats_earlier_empty_slot() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(7, ItemKind::Food, 1).unwrap();

        assert_eq!(inventory.place(ItemKind::Food, 1), Ok(7));
        assert!(inventory.slot_at(0).unwrap().is_none());
    }

    #[test]
    fn test_place_no_auto_split() {
        let mut inventory = Inventory::new(CAPACITY);
        let before = inventory.clone();

        assert_eq!(
            inventory.place(ItemKind::Food, 100),
            Err(InventoryError::CapacityExceeded {
                kind: ItemKind::Food,
                quantity: 100,
                max_stack_size: 64,
            })
        );
        assert_eq!(
            inventory.place(ItemKind::Sword, 2),
            Err(InventoryError::CapacityExceeded {
                kind: ItemKind::Sword,
                quantity: 2,
                max_stack_size: 1,
            })
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_place_non_stackable_starts_new_stack() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Sword, 1).unwrap();

        assert_eq!(inventory.place(ItemKind::Sword, 1), Ok(1));
        assert_eq!(inventory.count_item(ItemKind::Sword), 2);
    }

    /// Fills every slot with alternating swords and shields
    fn full_of_gear(capacity: usize) -> Inventory {
        let mut inventory = Inventory::new(capacity);
        for index in 0..capacity {
            let kind = if index % 2 == 0 { ItemKind::Sword } else { ItemKind::Shield };
            inventory.place_at(index, kind, 1).unwrap();
        }
        inventory
    }

    #[test]
    fn test_place_into_full_inventory() {
        let mut inventory = full_of_gear(CAPACITY);
        assert!(inventory.is_full());
        let before = inventory.clone();

        assert_eq!(inventory.place(ItemKind::Food, 1), Err(InventoryError::InventoryFull));
        assert_eq!(inventory.place(ItemKind::Sword, 1), Err(InventoryError::InventoryFull));
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_full_inventory_wins_over_capacity_exceeded() {
        let mut inventory = full_of_gear(CAPACITY);

        // No empty slot at all, so the oversize request reports fullness
        assert_eq!(inventory.place(ItemKind::Food, 500), Err(InventoryError::InventoryFull));
    }

    #[test]
    fn test_full_inventory_still_tops_up_stacks() {
        let mut inventory = Inventory::new(CAPACITY);
        for index in 0..CAPACITY {
            if index == 5 {
                inventory.place_at(index, ItemKind::Food, 3).unwrap();
            } else {
                inventory.place_at(index, ItemKind::Shield, 1).unwrap();
            }
        }
        assert!(inventory.is_full());

        assert_eq!(inventory.place(ItemKind::Food, 2), Ok(5));
        assert_eq!(inventory.count_item(ItemKind::Food), 5);
    }

    #[test]
    fn test_zero_capacity_inventory() {
        let mut inventory = Inventory::new(0);

        assert!(inventory.is_empty());
        assert!(inventory.is_full());
        assert_eq!(inventory.place(ItemKind::Food, 1), Err(InventoryError::InventoryFull));
        assert!(inventory.slot_at(0).is_err());
    }

    #[test]
    fn test_debug_dump_and_display() {
        let mut inventory = Inventory::new(CAPACITY);
        inventory.place_at(0, ItemKind::Sword, 1).unwrap();
        inventory.place_at(3, ItemKind::Food, 12).unwrap();

        assert_eq!(
            inventory.debug_dump(),
            vec![
                DumpEntry { index: 0, name: "Sword", count: 1 },
                DumpEntry { index: 3, name: "Food", count: 12 },
            ]
        );
        assert_eq!(inventory.to_string(), "{\n\t0: Sword (1),\n\t3: Food (12),\n}");
    }
}
