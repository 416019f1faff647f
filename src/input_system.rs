use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Scancode};
use sdl2::EventPump;

use inventory_game::{GameAction, InputBindings, MovementInput};

/// InputSystem processes SDL2 events and produces GameActions
///
/// Key presses are looked up by SDL key name in the configured bindings.
/// Held movement keys are read separately from the keyboard state, since
/// movement is continuous rather than one action per press.
pub struct InputSystem {
    bindings: InputBindings,
}

impl InputSystem {
    pub fn new(bindings: InputBindings) -> Self {
        InputSystem { bindings }
    }

    /// Process pending SDL2 events and return the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.bindings.action_for(&key.name()) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }
}

/// Reads WASD from the current keyboard state
pub fn movement_input(keyboard_state: &KeyboardState) -> MovementInput {
    MovementInput {
        up: keyboard_state.is_scancode_pressed(Scancode::W),
        down: keyboard_state.is_scancode_pressed(Scancode::S),
        left: keyboard_state.is_scancode_pressed(Scancode::A),
        right: keyboard_state.is_scancode_pressed(Scancode::D),
    }
}
