//! Location definitions.
//!
//! A location is one node of the campus graph. Exits are directed, named edges that
//! point at other locations by [`LocationId`]; the locations themselves live in the
//! [`GameWorld`](crate::GameWorld) arena.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::WorldError;
use crate::item::{Item, ItemHolder};
use crate::npc::Npc;
use crate::world::{WorldObject, match_index};

/// Stable handle for a location inside the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);
impl LocationId {
    pub(crate) fn new(index: usize) -> LocationId {
        LocationId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}
impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Any visitable place on campus.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    description: String,
    visited: bool,
    exits: BTreeMap<String, LocationId>,
    npcs: Vec<Npc>,
    items: Vec<Item>,
}
impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Location {
        Location {
            name: name.into(),
            description: description.into(),
            visited: false,
            exits: BTreeMap::new(),
            npcs: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Register a one-way exit. The reverse edge has to be added separately.
    ///
    /// # Errors
    /// - if `direction` is blank or already used by another exit here
    pub fn add_exit(&mut self, direction: &str, to: LocationId) -> Result<(), WorldError> {
        if direction.trim().is_empty() {
            return Err(WorldError::BlankDirection);
        }
        if self.exits.contains_key(direction) {
            return Err(WorldError::DuplicateDirection(direction.to_string()));
        }
        self.exits.insert(direction.to_string(), to);
        Ok(())
    }

    /// Where the exit named exactly `direction` leads, if it exists.
    pub fn exit(&self, direction: &str) -> Option<LocationId> {
        self.exits.get(direction).copied()
    }

    /// All exits, sorted by direction.
    pub fn exits(&self) -> impl Iterator<Item = (&str, LocationId)> {
        self.exits.iter().map(|(dir, to)| (dir.as_str(), *to))
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Find an NPC here matching player input.
    pub fn find_npc(&self, query: &str) -> Option<&Npc> {
        match_index(&self.npcs, query).map(|idx| &self.npcs[idx])
    }

    /// Mutable counterpart of [`Location::find_npc`], for conversations.
    pub fn find_npc_mut(&mut self, query: &str) -> Option<&mut Npc> {
        match_index(&self.npcs, query).map(|idx| &mut self.npcs[idx])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn set_visited(&mut self) {
        self.visited = true;
    }

    pub fn visited(&self) -> bool {
        self.visited
    }
}
impl WorldObject for Location {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
impl ItemHolder for Location {
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn remove_item_by_name(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(idx))
    }

    fn find_item(&self, query: &str) -> Option<&Item> {
        match_index(&self.items, query).map(|idx| &self.items[idx])
    }
}
