use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::inventory::PlacementStep;

/// Actions the player can trigger from a key press
///
/// This decouples raw input from action execution: the front-end turns a
/// key event into a `GameAction` and the game loop carries it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Show or hide the inventory panel
    ToggleInventory,

    /// Put an item into the player's inventory
    PickUp(PlacementStep),

    Quit,
}

/// What a key is bound to, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BindingAction {
    ToggleInventory,
    PickUp(PlacementStep),
    Quit,
}

impl From<BindingAction> for GameAction {
    fn from(action: BindingAction) -> Self {
        match action {
            BindingAction::ToggleInventory => GameAction::ToggleInventory,
            BindingAction::PickUp(step) => GameAction::PickUp(step),
            BindingAction::Quit => GameAction::Quit,
        }
    }
}

/// One key-to-action entry in the config file
///
/// `key` is a key name as SDL reports it ("Tab", "F", "1", "Escape").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: BindingAction,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>, action: BindingAction) -> Self {
        KeyBinding {
            key: key.into(),
            action,
        }
    }
}

/// Lookup table from key name to action
///
/// Key names are compared case-insensitively. When the same key appears
/// twice, the later binding wins.
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    by_key: HashMap<String, BindingAction>,
}

impl InputBindings {
    pub fn new(bindings: &[KeyBinding]) -> Self {
        let by_key = bindings
            .iter()
            .map(|binding| (normalize_key(&binding.key), binding.action))
            .collect();

        InputBindings { by_key }
    }

    /// Resolves a key name to the action bound to it
    pub fn action_for(&self, key_name: &str) -> Option<GameAction> {
        self.by_key
            .get(&normalize_key(key_name))
            .map(|&action| action.into())
    }

    /// Number of distinct bound keys
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
