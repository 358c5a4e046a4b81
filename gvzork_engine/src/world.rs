//! Data structures representing the game world.
//!
//! This module defines [`GameWorld`], which owns every location along with the
//! player and the delivery goal, and is mutated by the command handlers.

use crate::command::CommandTable;
use crate::error::WorldError;
use crate::location::{Location, LocationId};
use crate::player::Player;
use crate::random::RandomSource;
use crate::view::{ExitLine, LocationSummary};

use anyhow::{Context, Result};
use log::info;

/// Methods common to any named object in the world.
pub trait WorldObject {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// How a finished session is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Complete state of the running game.
///
/// Locations are stored in an arena indexed by [`LocationId`]; exits and the player's
/// position refer into it by id.
#[derive(Debug)]
pub struct GameWorld {
    pub locations: Vec<Location>,
    pub player: Player,
    pub commands: CommandTable,
    pub carry_capacity: u32,
    pub calories_needed: i32,
    pub delivery_location: LocationId,
    pub recipient: String,
    pub in_progress: bool,
    pub random: Box<dyn RandomSource>,
}
impl GameWorld {
    /// Obtain a reference to the location with the given id.
    /// # Errors
    /// - if the id does not index a location in this world
    pub fn location(&self, id: LocationId) -> Result<&Location, WorldError> {
        self.locations
            .get(id.index())
            .ok_or(WorldError::UnknownLocation(id.index()))
    }

    /// Obtain a mutable reference to the location with the given id.
    /// # Errors
    /// - if the id does not index a location in this world
    pub fn location_mut(&mut self, id: LocationId) -> Result<&mut Location, WorldError> {
        self.locations
            .get_mut(id.index())
            .ok_or(WorldError::UnknownLocation(id.index()))
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not found
    pub fn player_location_ref(&self) -> Result<&Location> {
        let id = self.player.location;
        self.location(id)
            .with_context(|| format!("looking up player location {id}"))
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not found
    pub fn player_location_mut(&mut self) -> Result<&mut Location> {
        let id = self.player.location;
        self.location_mut(id)
            .with_context(|| format!("looking up player location {id}"))
    }

    /// Ids of every location, in arena order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> {
        (0..self.locations.len()).map(LocationId::new)
    }

    /// Pick any location uniformly at random, including the current one.
    pub fn random_location(&mut self) -> LocationId {
        LocationId::new(self.random.pick_index(self.locations.len()))
    }

    /// Move the player to a random location and return where they landed.
    pub fn teleport_player(&mut self) -> LocationId {
        let destination = self.random_location();
        self.player.location = destination;
        info!("player teleported to location {destination}");
        destination
    }

    /// True if deliveries are accepted where the player stands.
    pub fn at_delivery_location(&self) -> bool {
        self.player.location == self.delivery_location
    }

    /// Success once the calorie goal has been met, failure otherwise.
    pub fn outcome(&self) -> Outcome {
        if self.calories_needed <= 0 {
            Outcome::Victory
        } else {
            Outcome::Defeat
        }
    }

    /// Gather everything needed to describe a location, including what is known about
    /// each exit's destination.
    /// # Errors
    /// - if the location or any exit destination is not in this world
    pub fn location_summary(&self, id: LocationId) -> Result<LocationSummary> {
        let location = self.location(id)?;
        let mut exits = Vec::new();
        for (direction, to) in location.exits() {
            let destination = self
                .location(to)
                .with_context(|| format!("resolving '{direction}' exit of {}", location.name()))?;
            exits.push(ExitLine {
                direction: direction.to_string(),
                destination: destination.name().to_string(),
                visited: destination.visited(),
            });
        }
        Ok(LocationSummary {
            name: location.name().to_string(),
            description: location.description().to_string(),
            npcs: location.npcs().iter().map(|npc| npc.name().to_string()).collect(),
            items: location.items().iter().map(ToString::to_string).collect(),
            exits,
        })
    }
}

/// Index of the first object matching player input.
///
/// A case-insensitive exact name match wins; failing that, the first name containing
/// the query (case-insensitive) is chosen, so "nail" finds "Rusty Nail".
pub fn match_index<T: WorldObject>(candidates: &[T], query: &str) -> Option<usize> {
    let lc_query = query.to_lowercase();
    candidates
        .iter()
        .position(|c| c.name().to_lowercase() == lc_query)
        .or_else(|| {
            candidates
                .iter()
                .position(|c| c.name().to_lowercase().contains(&lc_query))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemHolder};
    use crate::loader::WorldBuilder;
    use crate::random::ScriptedSource;
    use crate::{GameConfig, Npc};

    fn two_room_world() -> GameWorld {
        let mut builder = WorldBuilder::new();
        let hall = builder.add_location(Location::new("Hall", "Labs."));
        let woods = builder.add_location(Location::new("Woods", "Trees."));
        builder.connect(hall, "west", woods).unwrap();
        builder.connect(woods, "east", hall).unwrap();
        builder
            .location_mut(hall)
            .unwrap()
            .add_item(Item::new("Cookie", "Sweet.", 10, 1).unwrap());
        builder
            .location_mut(woods)
            .unwrap()
            .add_npc(Npc::new("Elf", "Magical.", vec![]).unwrap());
        builder
            .build(&GameConfig::default(), Box::new(ScriptedSource::new([0])))
            .unwrap()
    }

    #[test]
    fn match_prefers_exact_then_partial() {
        let items = vec![
            Item::new("Rusty Nail", "Old.", 0, 1).unwrap(),
            Item::new("Nail", "New.", 0, 1).unwrap(),
        ];
        assert_eq!(match_index(&items, "nail"), Some(1));
        assert_eq!(match_index(&items, "rusty"), Some(0));
        assert_eq!(match_index(&items, "screw"), None);
    }

    #[test]
    fn single_letter_query_takes_first_containing_name() {
        let items = vec![
            Item::new("Granola", "Crunchy.", 190, 1).unwrap(),
            Item::new("Cookie", "Sweet.", 10, 1).unwrap(),
            Item::new("Apple", "Crisp.", 95, 1).unwrap(),
        ];
        assert_eq!(match_index(&items, "e"), Some(1));
        assert_eq!(match_index(&items, "A"), Some(0));
        assert_eq!(match_index(&items, "z"), None);
    }

    #[test]
    fn summary_marks_exit_by_destination_visit() {
        let mut world = two_room_world();
        let hall = world.player.location;
        let summary = world.location_summary(hall).unwrap();
        assert_eq!(summary.exits.len(), 1);
        assert!(!summary.exits[0].visited);
        assert_eq!(summary.items, ["Cookie(10 calories)- 1 lb- Sweet."]);

        world.location_mut(hall).unwrap().set_visited();
        let woods = world.location(hall).unwrap().exit("west").unwrap();
        let summary = world.location_summary(woods).unwrap();
        assert!(summary.exits[0].visited);
        assert_eq!(summary.npcs, ["Elf"]);
    }

    #[test]
    fn outcome_follows_calories_needed() {
        let mut world = two_room_world();
        assert_eq!(world.outcome(), Outcome::Defeat);
        world.calories_needed = 0;
        assert_eq!(world.outcome(), Outcome::Victory);
        world.calories_needed = -20;
        assert_eq!(world.outcome(), Outcome::Victory);
    }

    #[test]
    fn teleport_uses_random_source() {
        let mut world = two_room_world();
        assert_eq!(world.location_ids().count(), 2);
        world.random = Box::new(ScriptedSource::new([1, 0]));
        let landed = world.teleport_player();
        assert_eq!(landed.index(), 1);
        assert!(world.at_delivery_location());
        let landed = world.teleport_player();
        assert_eq!(landed.index(), 0);
        assert!(!world.at_delivery_location());
    }

    #[test]
    fn unknown_location_is_an_error() {
        let world = two_room_world();
        assert!(matches!(
            world.location(LocationId::new(9)),
            Err(WorldError::UnknownLocation(9))
        ));
    }
}
