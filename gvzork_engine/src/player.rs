//! Player -- the adventurer's position and pack.
use crate::item::{Item, ItemHolder};
use crate::location::LocationId;
use crate::world::{WorldObject, match_index};

use log::warn;

/// Where the player stands and what they carry.
///
/// `carried_weight` is kept as a running total rather than recomputed from the
/// inventory, so it can drift from the items' real weights (see the `magic` command).
#[derive(Debug, Clone)]
pub struct Player {
    pub location: LocationId,
    pub inventory: Vec<Item>,
    pub carried_weight: u32,
}
impl Player {
    pub fn new(location: LocationId) -> Player {
        Player {
            location,
            inventory: Vec::new(),
            carried_weight: 0,
        }
    }

    /// Halve the carried weight, dropping any remainder. The pack's contents are untouched.
    pub fn halve_weight(&mut self) {
        self.carried_weight /= 2;
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item: Item) {
        self.carried_weight = self.carried_weight.saturating_add(item.weight());
        self.inventory.push(item);
    }

    fn remove_item_by_name(&mut self, name: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|item| item.name() == name)?;
        let item = self.inventory.remove(idx);
        if item.weight() > self.carried_weight {
            warn!(
                "carried weight ({}) below weight of removed item {} ({}); clamping to zero",
                self.carried_weight,
                item.name(),
                item.weight()
            );
        }
        self.carried_weight = self.carried_weight.saturating_sub(item.weight());
        Some(item)
    }

    fn find_item(&self, query: &str) -> Option<&Item> {
        match_index(&self.inventory, query).map(|idx| &self.inventory[idx])
    }
}
