//! Inventory UI System
//!
//! Renders the player's inventory as a centered grid panel, one cell per slot.
//! Follows the Screen-Space GUI pattern: fixed screen position, drawn on top
//! of the world, open/closed state owned here.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use inventory_game::Inventory;

use crate::text::{draw_simple_text, text_width, LINE_HEIGHT};

const SLOT_SIZE: u32 = 96;
const SLOT_MARGIN: u32 = 6;
const TITLE: &str = "INVENTORY";
const TITLE_SCALE: u32 = 2;
const NAME_SCALE: u32 = 2;
const COUNT_SCALE: u32 = 2;

/// Represents the visual style of the inventory UI.
#[derive(Debug, Clone)]
pub struct InventoryUIStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub slot_color: Color,
    pub text_color: Color,
    pub count_color: Color,
}

impl Default for InventoryUIStyle {
    fn default() -> Self {
        InventoryUIStyle {
            background_color: Color::RGBA(25, 25, 35, 230),
            border_color: Color::RGBA(80, 80, 100, 220),
            slot_color: Color::RGBA(50, 50, 60, 200),
            text_color: Color::RGB(255, 255, 255),
            count_color: Color::RGB(255, 255, 100),
        }
    }
}

/// Manages the open/closed state and rendering of the inventory panel.
pub struct InventoryUI {
    pub is_open: bool,
    style: InventoryUIStyle,
}

impl InventoryUI {
    /// Creates a closed `InventoryUI` with default styling.
    pub fn new() -> Self {
        InventoryUI {
            is_open: false,
            style: InventoryUIStyle::default(),
        }
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Renders the inventory panel if it is open.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        inventory: &Inventory,
        columns: usize,
    ) -> Result<(), String> {
        if !self.is_open {
            return Ok(());
        }

        let columns = columns.clamp(1, inventory.capacity().max(1));
        let rows = inventory.capacity().div_ceil(columns);
        let title_height = LINE_HEIGHT * TITLE_SCALE + SLOT_MARGIN * 2;

        let panel_width = (SLOT_SIZE + SLOT_MARGIN) * columns as u32 + SLOT_MARGIN;
        let panel_height = (SLOT_SIZE + SLOT_MARGIN) * rows as u32 + SLOT_MARGIN + title_height;

        let (screen_width, screen_height) = canvas.logical_size();
        let start_x = (screen_width.saturating_sub(panel_width) / 2) as i32;
        let start_y = (screen_height.saturating_sub(panel_height) / 2) as i32;

        // Draw panel background
        let bg_rect = Rect::new(start_x, start_y, panel_width, panel_height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bg_rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(bg_rect)?;

        draw_simple_text(
            canvas,
            TITLE,
            start_x + SLOT_MARGIN as i32,
            start_y + SLOT_MARGIN as i32,
            self.style.text_color,
            TITLE_SCALE,
        )?;

        let grid_y = start_y + title_height as i32;

        for (index, slot) in inventory.slots() {
            let row = index / columns;
            let col = index % columns;
            let slot_rect = Rect::new(
                start_x + (SLOT_MARGIN + col as u32 * (SLOT_SIZE + SLOT_MARGIN)) as i32,
                grid_y + (row as u32 * (SLOT_SIZE + SLOT_MARGIN)) as i32,
                SLOT_SIZE,
                SLOT_SIZE,
            );

            canvas.set_draw_color(self.style.slot_color);
            canvas.fill_rect(slot_rect)?;
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(slot_rect)?;

            let Some(stack) = slot else {
                continue;
            };

            // Center the name near the top of the cell
            let name = stack.kind.name();
            let name_x = slot_rect.x() + (SLOT_SIZE.saturating_sub(text_width(name, NAME_SCALE)) / 2) as i32;
            draw_simple_text(
                canvas,
                name,
                name_x,
                slot_rect.y() + 12,
                self.style.text_color,
                NAME_SCALE,
            )?;

            // Draw count in the bottom-right corner for stackable items
            if stack.kind.is_stackable() {
                let count_text = stack.count.to_string();
                let count_width = text_width(&count_text, COUNT_SCALE);
                draw_simple_text(
                    canvas,
                    &count_text,
                    slot_rect.right() - count_width as i32 - 6,
                    slot_rect.bottom() - (LINE_HEIGHT * COUNT_SCALE) as i32 - 6,
                    self.style.count_color,
                    COUNT_SCALE,
                )?;
            }
        }

        Ok(())
    }
}

impl Default for InventoryUI {
    fn default() -> Self {
        Self::new()
    }
}
