//! `repl::npc` module
//!
//! Contains repl loop handlers for interacting with NPCs.

use crate::{GameWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

const NO_SUCH_NPC: &str = "No such NPC in this location.";

/// Hear the next line from an NPC at the current location.
///
/// # Errors
/// - if the player's location cannot be resolved
pub fn talk_handler(world: &mut GameWorld, view: &mut View, arg: Option<&str>) -> Result<()> {
    let Some(query) = arg else {
        view.push(ViewItem::Prompt("Who do you want to talk to?".into()));
        return Ok(());
    };

    if let Some(npc) = world.player_location_mut()?.find_npc_mut(query) {
        let quote = npc.next_message().to_string();
        info!("player talked to {}", npc.name());
        view.push(ViewItem::NpcSpeech {
            speaker: npc.name().to_string(),
            quote,
        });
    } else {
        view.push(ViewItem::ActionFailure(NO_SUCH_NPC.into()));
    }
    Ok(())
}

/// Show an NPC's description. Does not advance their dialogue.
///
/// # Errors
/// - if the player's location cannot be resolved
pub fn meet_handler(world: &GameWorld, view: &mut View, arg: Option<&str>) -> Result<()> {
    let Some(query) = arg else {
        view.push(ViewItem::Prompt("Who do you want to meet?".into()));
        return Ok(());
    };

    if let Some(npc) = world.player_location_ref()?.find_npc(query) {
        view.push(ViewItem::NpcDescription {
            name: npc.name().to_string(),
            description: npc.description().to_string(),
        });
    } else {
        view.push(ViewItem::ActionFailure(NO_SUCH_NPC.into()));
    }
    Ok(())
}
