use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::BlendMode;
use std::time::Duration;

mod gui;
mod input_system;
mod text;

use gui::InventoryUI;
use input_system::{movement_input, InputSystem};
use inventory_game::inventory::seed_inventory;
use inventory_game::{logging, GameAction, GameConfig, InputBindings, Player};

const BACKGROUND_COLOR: Color = Color::RGB(0, 0, 0);
const PLAYER_COLOR: Color = Color::RGB(80, 160, 255);
const FRAME_TIME: Duration = Duration::new(0, 1_000_000_000u32 / 60);

fn main() {
    logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = GameConfig::discover().map_err(|e| e.to_string())?;
    let (width, height) = (config.window.width, config.window.height);

    let mut player = Player::new(&config.player, config.inventory.capacity);
    let report = seed_inventory(player.inventory_mut(), &config.starting_loadout);
    if !report.is_clean() {
        log::warn!(
            "{} of {} starting items could not be placed",
            report.failures.len(),
            config.starting_loadout.len()
        );
    }

    let bindings = InputBindings::new(&config.bindings);
    if bindings.is_empty() {
        log::warn!("No key bindings configured; only closing the window will quit");
    } else {
        log::debug!("Loaded {} key bindings", bindings.len());
    }
    let input_system = InputSystem::new(bindings);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let mut event_pump = sdl_context.event_pump()?;
    let mut inventory_ui = InventoryUI::new();

    log::info!(
        "Started {}x{} window with a {}-slot inventory",
        width,
        height,
        player.inventory().capacity()
    );

    'running: loop {
        for action in input_system.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::ToggleInventory => {
                    inventory_ui.toggle();
                    log::debug!("Inventory panel open: {}", inventory_ui.is_open);
                }
                GameAction::PickUp(step) => match player.pick_up(&step) {
                    Ok(index) => {
                        log::info!("Picked up {} x{} into slot {}", step.item, step.quantity, index);
                        log::debug!("Inventory: {}", player.inventory());
                    }
                    Err(err) => log::warn!("Could not pick up {} x{}: {}", step.item, step.quantity, err),
                },
            }
        }

        // Player stands still while the panel is open
        if !inventory_ui.is_open {
            let movement = movement_input(&event_pump.keyboard_state());
            player.update(movement, (width, height));
        }

        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        canvas.set_draw_color(PLAYER_COLOR);
        canvas.fill_rect(Rect::new(player.x, player.y, player.size, player.size))?;

        inventory_ui.render(&mut canvas, player.inventory(), config.inventory.columns)?;

        canvas.present();

        // Cap at ~60 FPS
        std::thread::sleep(FRAME_TIME);
    }

    Ok(())
}
