//! `repl::look` module

use crate::{GameWorld, View, ViewItem};

use anyhow::Result;

/// Describe the current location: NPCs, items, and exits.
///
/// # Errors
/// - if the player's location or one of its exits cannot be resolved
pub fn look_handler(world: &GameWorld, view: &mut View) -> Result<()> {
    view.push(ViewItem::LocationSummary(world.location_summary(world.player.location)?));
    Ok(())
}
