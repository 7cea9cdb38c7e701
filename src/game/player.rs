use super::types::{Item, RoomKey};

/// Marker shown for an empty inventory.
pub const EMPTY_INVENTORY: &str = "(empty)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    inventory: Vec<Item>,
    /// Key into the world registry; the world owns the room itself.
    pub current_room: RoomKey,
}

impl Player {
    pub fn new(start: RoomKey) -> Self {
        Self {
            inventory: Vec::new(),
            current_room: start,
        }
    }

    /// Add an item unless one with the same name is already held.
    /// Returns whether the inventory changed.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(&item.name) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|it| it.is_named(name))
    }

    pub fn has_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.has_item(name))
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Comma-joined item names in acquisition order.
    pub fn inventory_list(&self) -> String {
        if self.inventory.is_empty() {
            return EMPTY_INVENTORY.to_string();
        }
        self.inventory
            .iter()
            .map(|it| it.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
