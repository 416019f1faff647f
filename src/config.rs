//! Game configuration
//!
//! Everything tunable lives in one JSON file (window size, inventory
//! capacity, player speed, key bindings, starting loadout). Every field has a
//! default, so a missing file or a partial file both work.
//!
//! # Lookup order
//!
//! 1. `./config/game.json`
//! 2. `<user config dir>/inventory_game/game.json`
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::input::{BindingAction, KeyBinding};
use crate::inventory::{default_loadout, PlacementStep};
use crate::item::ItemKind;

/// Name of the config file in either lookup location
pub const CONFIG_FILE_NAME: &str = "game.json";

/// Per-user config subdirectory
const APP_DIR_NAME: &str = "inventory_game";

/// Largest accepted inventory capacity
pub const MAX_INVENTORY_CAPACITY: usize = 1024;

/// Largest accepted window width or height
pub const MAX_WINDOW_DIMENSION: u32 = 16384;

/// Errors from loading or validating the config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Inventory Test".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots
    pub capacity: usize,

    /// Cells per row in the inventory panel
    pub columns: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            capacity: 25,
            columns: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: i32,
    pub start_y: i32,
    /// Pixels per frame
    pub speed: i32,
    /// Side length of the player square
    pub size: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            start_x: 400,
            start_y: 300,
            speed: 4,
            size: 32,
        }
    }
}

/// Root of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub inventory: InventoryConfig,
    pub player: PlayerConfig,
    pub bindings: Vec<KeyBinding>,
    pub starting_loadout: Vec<PlacementStep>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            inventory: InventoryConfig::default(),
            player: PlayerConfig::default(),
            bindings: default_bindings(),
            starting_loadout: default_loadout(),
        }
    }
}

/// Key bindings used when the config file doesn't list any
pub fn default_bindings() -> Vec<KeyBinding> {
    let pick_up = |item, quantity| BindingAction::PickUp(PlacementStep::auto(item, quantity));

    vec![
        KeyBinding::new("Tab", BindingAction::ToggleInventory),
        KeyBinding::new("I", BindingAction::ToggleInventory),
        KeyBinding::new("F", pick_up(ItemKind::Food, 1)),
        KeyBinding::new("G", pick_up(ItemKind::Food, 21)),
        KeyBinding::new("1", pick_up(ItemKind::Sword, 1)),
        KeyBinding::new("2", pick_up(ItemKind::Shield, 1)),
        KeyBinding::new("Escape", BindingAction::Quit),
    ]
}

impl GameConfig {
    /// Parses and validates a config from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Candidate config file locations, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config").join(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Loads the first config file found, or the defaults if there is none
    ///
    /// A file that exists but can't be used is an error; it is not skipped.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(&Self::search_paths())
    }

    fn discover_in(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.is_file()) {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks values serde can't check
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inventory = &self.inventory;
        if inventory.capacity == 0 || inventory.capacity > MAX_INVENTORY_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "inventory.capacity must be between 1 and {}",
                MAX_INVENTORY_CAPACITY
            )));
        }
        if inventory.columns == 0 || inventory.columns > inventory.capacity {
            return Err(ConfigError::Invalid(
                "inventory.columns must be between 1 and inventory.capacity".into(),
            ));
        }

        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        if window.width > MAX_WINDOW_DIMENSION || window.height > MAX_WINDOW_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "window size must be at most {0}x{0}",
                MAX_WINDOW_DIMENSION
            )));
        }

        // A step of a full window or more would jump straight across it
        let shortest_side = window.width.min(window.height) as i32;
        if self.player.speed <= 0 || self.player.speed >= shortest_side {
            return Err(ConfigError::Invalid(format!(
                "player.speed must be between 1 and {}",
                shortest_side - 1
            )));
        }
        Ok(())
    }
}
