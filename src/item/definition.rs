use super::kind::ItemKind;

/// The blueprint for an item type
///
/// This defines the static properties shared by every unit of a kind.
/// Think of it as the "class" and ItemStack as the "instance". Slots never
/// own a definition; they store the `ItemKind` and look it up here.
#[derive(Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    /// Which kind this row describes
    pub kind: ItemKind,

    /// Maximum stack size (1 = non-stackable, 64 = typical)
    pub max_stack_size: u32,

    /// Display name shown in UI
    pub name: &'static str,
}

/// The catalog, one row per kind, ordered by `ItemKind::index`
static ITEMS: [ItemDefinition; ItemKind::COUNT] = [
    ItemDefinition {
        kind: ItemKind::Food,
        max_stack_size: 64,
        name: "Food",
    },
    ItemDefinition {
        kind: ItemKind::Sword,
        max_stack_size: 1,
        name: "Sword",
    },
    ItemDefinition {
        kind: ItemKind::Shield,
        max_stack_size: 1,
        name: "Shield",
    },
];

/// Gets the definition for an item kind
///
/// Total for every kind; the catalog is fixed at compile time.
pub fn definition_of(kind: ItemKind) -> &'static ItemDefinition {
    &ITEMS[kind.index()]
}
