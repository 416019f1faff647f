use crate::config::PlayerConfig;
use crate::inventory::{Inventory, InventoryError, PlacementStep};

/// Which movement keys are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player entity: a square on screen that owns the inventory
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub speed: i32,
    pub velocity_x: i32,
    pub velocity_y: i32,
    inventory: Inventory,
}

impl Player {
    pub fn new(config: &PlayerConfig, inventory_capacity: usize) -> Self {
        Player {
            x: config.start_x,
            y: config.start_y,
            size: config.size,
            speed: config.speed,
            velocity_x: 0,
            velocity_y: 0,
            inventory: Inventory::new(inventory_capacity),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Moves the player one frame and keeps it inside `bounds` (width, height)
    pub fn update(&mut self, input: MovementInput, bounds: (u32, u32)) {
        self.velocity_x = 0;
        self.velocity_y = 0;

        if input.up {
            self.velocity_y = self.velocity_y.saturating_sub(self.speed);
        }
        if input.down {
            self.velocity_y = self.velocity_y.saturating_add(self.speed);
        }
        if input.left {
            self.velocity_x = self.velocity_x.saturating_sub(self.speed);
        }
        if input.right {
            self.velocity_x = self.velocity_x.saturating_add(self.speed);
        }

        // Normalize diagonal movement to maintain consistent speed
        if self.velocity_x != 0 && self.velocity_y != 0 {
            let diagonal_factor = 0.707; // 1.0 / sqrt(2.0)
            self.velocity_x = (self.velocity_x as f32 * diagonal_factor).round() as i32;
            self.velocity_y = (self.velocity_y as f32 * diagonal_factor).round() as i32;
        }

        let size = i32::try_from(self.size).unwrap_or(i32::MAX);
        let max_x = i32::try_from(bounds.0).unwrap_or(i32::MAX).saturating_sub(size).max(0);
        let max_y = i32::try_from(bounds.1).unwrap_or(i32::MAX).saturating_sub(size).max(0);
        self.x = self.x.saturating_add(self.velocity_x).clamp(0, max_x);
        self.y = self.y.saturating_add(self.velocity_y).clamp(0, max_y);
    }

    /// Puts an item into the inventory
    ///
    /// Returns the slot the item landed in.
    pub fn pick_up(&mut self, step: &PlacementStep) -> Result<usize, InventoryError> {
        step.apply(&mut self.inventory)
    }
}
