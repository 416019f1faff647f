use serde::{Deserialize, Serialize};

use super::error::InventoryError;
use super::inventory::Inventory;
use crate::item::ItemKind;

fn default_quantity() -> u32 {
    1
}

/// A single placement request: put `quantity` of `item` somewhere
///
/// With `slot` set this is a direct placement (`place_at`), otherwise
/// the inventory picks the slot (`place`). Used both for the starting
/// loadout in the config file and for "pick up" key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementStep {
    pub item: ItemKind,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<usize>,
}

impl PlacementStep {
    /// Auto-placed step
    pub fn auto(item: ItemKind, quantity: u32) -> Self {
        PlacementStep {
            item,
            quantity,
            slot: None,
        }
    }

    /// Step targeting one exact slot
    pub fn at(slot: usize, item: ItemKind, quantity: u32) -> Self {
        PlacementStep {
            item,
            quantity,
            slot: Some(slot),
        }
    }

    /// Runs this step against an inventory
    ///
    /// Returns the index the items landed in.
    pub fn apply(&self, inventory: &mut Inventory) -> Result<usize, InventoryError> {
        match self.slot {
            Some(index) => inventory
                .place_at(index, self.item, self.quantity)
                .map(|()| index),
            None => inventory.place(self.item, self.quantity),
        }
    }
}

/// Outcome of seeding an inventory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadoutReport {
    /// Number of steps that placed their items
    pub placed: usize,

    /// Steps that were refused, by position in the loadout
    pub failures: Vec<(usize, InventoryError)>,
}

impl LoadoutReport {
    /// Returns true if every step succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The starting inventory used when the config file doesn't give one
///
/// Sword in slot 0, then a Shield, four single Food, a second Sword,
/// two more Food, and a bundle of 21 Food.
pub fn default_loadout() -> Vec<PlacementStep> {
    let mut steps = vec![
        PlacementStep::at(0, ItemKind::Sword, 1),
        PlacementStep::auto(ItemKind::Shield, 1),
    ];
    steps.extend(std::iter::repeat_n(PlacementStep::auto(ItemKind::Food, 1), 4));
    steps.push(PlacementStep::auto(ItemKind::Sword, 1));
    steps.extend(std::iter::repeat_n(PlacementStep::auto(ItemKind::Food, 1), 2));
    steps.push(PlacementStep::auto(ItemKind::Food, 21));
    steps
}

/// Applies every step in order
///
/// A refused step doesn't stop the rest; it's logged and recorded in the
/// report.
pub fn seed_inventory(inventory: &mut Inventory, steps: &[PlacementStep]) -> LoadoutReport {
    let mut report = LoadoutReport::default();

    for (position, step) in steps.iter().enumerate() {
        match step.apply(inventory) {
            Ok(_) => report.placed += 1,
            Err(err) => {
                log::warn!("Loadout step {} ({} x{}) skipped: {}", position, step.item, step.quantity, err);
                report.failures.push((position, err));
            }
        }
    }

    log::debug!("Inventory after loadout: {}", inventory);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStack;

    #[test]
    fn test_default_loadout_final_state() {
        let mut inventory = Inventory::new(25);
        let report = seed_inventory(&mut inventory, &default_loadout());

        assert!(report.is_clean());
        assert_eq!(report.placed, 10);

        assert_eq!(inventory.slot_at(0), Ok(Some(ItemStack::new(ItemKind::Sword, 1))));
        assert_eq!(inventory.slot_at(1), Ok(Some(ItemStack::new(ItemKind::Shield, 1))));
        assert_eq!(inventory.slot_at(2), Ok(Some(ItemStack::new(ItemKind::Food, 27))));
        assert_eq!(inventory.slot_at(3), Ok(Some(ItemStack::new(ItemKind::Sword, 1))));
        for index in 4..25 {
            assert_eq!(inventory.slot_at(index), Ok(None));
        }
    }

    #[test]
    fn test_default_loadout_step_by_step() {
        let mut inventory = Inventory::new(25);
        let destinations: Vec<usize> = default_loadout()
            .iter()
            .map(|step| step.apply(&mut inventory).unwrap())
            .collect();

        // Food always tops up slot 2; the second Sword can't stack with slot 0
        assert_eq!(destinations, vec![0, 1, 2, 2, 2, 2, 3, 2, 2, 2]);
    }

    #[test]
    fn test_failed_steps_are_reported_not_fatal() {
        let mut inventory = Inventory::new(2);
        let steps = vec![
            PlacementStep::at(0, ItemKind::Sword, 1),
            PlacementStep::at(0, ItemKind::Shield, 1),
            PlacementStep::auto(ItemKind::Food, 80),
            PlacementStep::auto(ItemKind::Food, 3),
            PlacementStep::auto(ItemKind::Shield, 1),
        ];

        let report = seed_inventory(&mut inventory, &steps);

        assert_eq!(report.placed, 2);
        assert_eq!(
            report.failures,
            vec![
                (
                    1,
                    InventoryError::SlotOccupiedByOtherItem {
                        index: 0,
                        occupant: ItemKind::Sword,
                    }
                ),
                (
                    2,
                    InventoryError::CapacityExceeded {
                        kind: ItemKind::Food,
                        quantity: 80,
                        max_stack_size: 64,
                    }
                ),
                (4, InventoryError::InventoryFull),
            ]
        );
        assert_eq!(inventory.item_at(1), Ok(Some(ItemKind::Food)));
    }

    #[test]
    fn test_step_from_json() {
        let step: PlacementStep = serde_json::from_str(r#"{ "item": "Food" }"#).unwrap();
        assert_eq!(step, PlacementStep::auto(ItemKind::Food, 1));

        let step: PlacementStep =
            serde_json::from_str(r#"{ "item": "Sword", "slot": 4 }"#).unwrap();
        assert_eq!(step, PlacementStep::at(4, ItemKind::Sword, 1));
    }

    #[test]
    fn test_step_with_bad_slot() {
        let mut inventory = Inventory::new(25);
        let step = PlacementStep::at(25, ItemKind::Food, 1);

        assert_eq!(
            step.apply(&mut inventory),
            Err(InventoryError::InvalidIndex { index: 25, capacity: 25 })
        );
    }
}
