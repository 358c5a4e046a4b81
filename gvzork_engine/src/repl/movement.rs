//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location.

use crate::{GameWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Move the player through the named exit of the current location.
///
/// # Errors
/// - if the player's location or the exit's destination cannot be resolved
pub fn go_handler(world: &mut GameWorld, view: &mut View, arg: Option<&str>) -> Result<()> {
    let Some(direction) = arg else {
        view.push(ViewItem::Prompt("Where do you want to go?".into()));
        return Ok(());
    };

    let current = world.player_location_ref()?;
    let Some(destination) = current
        .exit(direction)
        .or_else(|| current.exit(&direction.to_lowercase()))
    else {
        view.push(ViewItem::ActionFailure("You cannot go that way.".into()));
        return Ok(());
    };

    let leaving = current.name().to_string();
    world.player_location_mut()?.set_visited();
    world.player.location = destination;

    view.push(ViewItem::Transition(format!("You moved {direction}.")));
    info!(
        "player moved {direction} from {leaving} to {}",
        world.location(destination)?.name()
    );
    Ok(())
}

/// Send the player to a random location (possibly the one they are in).
///
/// # Errors
/// - if the chosen location cannot be resolved
pub fn teleport_handler(world: &mut GameWorld, view: &mut View) -> Result<()> {
    let destination = world.teleport_player();
    let name = world.location(destination)?.name();
    view.push(ViewItem::Transition(format!("You have been teleported to {name}.")));
    Ok(())
}
