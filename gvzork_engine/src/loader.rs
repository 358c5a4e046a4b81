//! Loader utilities for building a [`GameWorld`].
//!
//! The campus itself is fixed and assembled here in code; only the rules in
//! `config.toml` come from disk. Every entity is validated as it is built, and any
//! failure aborts startup.

use crate::command::CommandTable;
use crate::config::{GameConfig, load_config};
use crate::data_paths::data_path;
use crate::error::WorldError;
use crate::item::{Item, ItemHolder};
use crate::location::{Location, LocationId};
use crate::npc::Npc;
use crate::player::Player;
use crate::random::{RandomSource, RngSource};
use crate::world::{GameWorld, WorldObject};

use anyhow::{Context, Result, bail};
use log::info;

/// Collects locations into an arena and wires them together before play starts.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    locations: Vec<Location>,
}
impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location to the arena and return its id.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = LocationId::new(self.locations.len());
        self.locations.push(location);
        id
    }

    /// Mutable access to a location already added, for stocking items and NPCs.
    /// # Errors
    /// - if `id` was not issued by this builder
    pub fn location_mut(&mut self, id: LocationId) -> Result<&mut Location, WorldError> {
        self.locations
            .get_mut(id.index())
            .ok_or(WorldError::UnknownLocation(id.index()))
    }

    /// Add a one-way exit from `from` to `to`.
    /// # Errors
    /// - if either id is unknown, or the direction is blank or already taken at `from`
    pub fn connect(&mut self, from: LocationId, direction: &str, to: LocationId) -> Result<(), WorldError> {
        if to.index() >= self.locations.len() {
            return Err(WorldError::UnknownLocation(to.index()));
        }
        self.location_mut(from)?.add_exit(direction, to)
    }

    /// Add exits in both directions between two locations.
    /// # Errors
    /// - as [`WorldBuilder::connect`], for either edge
    pub fn connect_both(
        &mut self,
        a: LocationId,
        a_to_b: &str,
        b: LocationId,
        b_to_a: &str,
    ) -> Result<(), WorldError> {
        self.connect(a, a_to_b, b)?;
        self.connect(b, b_to_a, a)
    }

    /// Id of the first location with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|location| location.name() == name)
            .map(LocationId::new)
    }

    /// Finish the world: resolve the delivery location and drop the player somewhere random.
    /// # Errors
    /// - if no locations were added
    /// - if `config.delivery_location` names no location
    pub fn build(self, config: &GameConfig, mut random: Box<dyn RandomSource>) -> Result<GameWorld> {
        if self.locations.is_empty() {
            bail!("cannot build a world with no locations");
        }
        let delivery_location = self
            .find_by_name(&config.delivery_location)
            .with_context(|| format!("delivery location '{}' not found in world", config.delivery_location))?;
        let start = LocationId::new(random.pick_index(self.locations.len()));
        let start_name = self
            .locations
            .get(start.index())
            .map(|location| location.name().to_string())
            .with_context(|| format!("random start {start} is outside the {} locations", self.locations.len()))?;

        info!("{} locations added to world", self.locations.len());
        info!(
            "{} NPCs added to world",
            self.locations.iter().map(|l| l.npcs().len()).sum::<usize>()
        );
        info!(
            "{} items added to world",
            self.locations.iter().map(|l| l.items().len()).sum::<usize>()
        );
        info!("player starts at {start_name}");

        Ok(GameWorld {
            locations: self.locations,
            player: Player::new(start),
            commands: CommandTable::standard(),
            carry_capacity: config.carry_capacity,
            calories_needed: config.calorie_target,
            delivery_location,
            recipient: config.recipient.clone(),
            in_progress: true,
            random,
        })
    }
}

/// Assemble the campus: four connected locations, their NPCs, and their items.
///
/// # Errors
/// - if any entity fails validation, or the config's delivery location is missing
pub fn build_campus_world(config: &GameConfig, random: Box<dyn RandomSource>) -> Result<GameWorld> {
    let mut builder = WorldBuilder::new();

    let padnos = builder.add_location(Location::new(
        "Padnos Hall",
        "Lots of science labs are in this building.",
    ));
    let zumberge = builder.add_location(Location::new("Zumberge Field", "A large open field on campus."));
    let kirkhoff = builder.add_location(Location::new(
        "Kirkhoff Center",
        "The student union with restaurants and stores.",
    ));
    let woods = builder.add_location(Location::new("Woods", "A mysterious forest behind campus."));

    builder
        .connect_both(padnos, "east", zumberge, "west")
        .context("connecting Padnos Hall and Zumberge Field")?;
    builder
        .connect_both(zumberge, "north", kirkhoff, "south")
        .context("connecting Zumberge Field and Kirkhoff Center")?;
    builder
        .connect_both(kirkhoff, "west", woods, "east")
        .context("connecting Kirkhoff Center and the Woods")?;

    let elf = Npc::new(
        "Elf",
        "A magical creature who can save GVSU.",
        lines(&["Bring me food!", "I need 500 calories!", "You're almost there!"]),
    )
    .context("building the Elf")?;
    let louie = Npc::new(
        "Louie",
        "The Laker mascot, cheering for anyone who walks by.",
        lines(&[
            "Anchor up!",
            "The Elf in the Woods looks awfully hungry.",
            "Kirkhoff has the best pizza on campus.",
        ]),
    )
    .context("building Louie")?;
    builder.location_mut(woods)?.add_npc(elf);
    builder.location_mut(kirkhoff)?.add_npc(louie);

    let stock: [(LocationId, Item); 7] = [
        (padnos, Item::new("Cookie", "A delicious M&M cookie.", 10, 1)?),
        (padnos, Item::new("Granola", "A crunchy granola bar from a lab vending machine.", 190, 1)?),
        (zumberge, Item::new("Rusty Nail", "A rusty nail (I hope you've had a tetanus shot).", 0, 1)?),
        (zumberge, Item::new("Apple", "A crisp apple someone left on the bleachers.", 95, 1)?),
        (kirkhoff, Item::new("Pizza", "A whole pepperoni pizza, still warm.", 285, 4)?),
        (kirkhoff, Item::new("Burrito", "A burrito the size of your forearm.", 430, 2)?),
        (woods, Item::new("Pinecone", "A sticky pinecone. Not food.", 0, 2)?),
    ];
    for (location, item) in stock {
        builder.location_mut(location)?.add_item(item);
    }

    builder.build(config, random)
}

/// Load the config from the data directory and build the campus with a live RNG.
///
/// # Errors
/// Errors bubble up from world building.
pub fn load_world() -> Result<GameWorld> {
    let config = load_config(&data_path("config.toml"));
    info!("game config: {config:?}");
    build_campus_world(&config, Box::new(RngSource::thread()))
}

fn lines(messages: &[&str]) -> Vec<String> {
    messages.iter().map(|m| (*m).to_string()).collect()
}
