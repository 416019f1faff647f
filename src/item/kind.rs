use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{definition_of, ItemDefinition};

/// Identifier for every item that exists in the game
///
/// The set is closed: adding a kind means adding a variant here and a
/// matching row in the catalog table. Config files name kinds the same way
/// `FromStr` does, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ItemKind {
    Food,
    Sword,
    Shield,
}

/// Returned when a config file or key binding names an item that doesn't exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown item kind: {0}")]
pub struct UnknownItemKind(pub String);

impl ItemKind {
    /// Every kind, in declaration order (matches catalog order)
    pub const ALL: [ItemKind; 3] = [ItemKind::Food, ItemKind::Sword, ItemKind::Shield];

    /// Number of kinds in the catalog
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this kind in the catalog table
    pub(crate) const fn index(self) -> usize {
        match self {
            ItemKind::Food => 0,
            ItemKind::Sword => 1,
            ItemKind::Shield => 2,
        }
    }

    /// Looks up the static definition for this kind
    pub fn definition(self) -> &'static ItemDefinition {
        definition_of(self)
    }

    /// Display name shown in UI
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Maximum number of units a single slot may hold
    pub fn max_stack_size(self) -> u32 {
        self.definition().max_stack_size
    }

    /// Returns true if more than one unit fits in a slot
    ///
    /// The inventory panel only draws a count for stackable items.
    pub fn is_stackable(self) -> bool {
        self.max_stack_size() != 1
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for ItemKind {
    type Error = UnknownItemKind;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownItemKind(s.to_string()))
    }
}
