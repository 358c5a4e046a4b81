//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are about the session rather
//! than the world: help, quitting, and the closing banner.

use crate::world::Outcome;
use crate::{GameWorld, View, ViewItem, WorldObject};

use log::{info, warn};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;

pub const DEFEAT_MESSAGE: &str = "You failed to save GVSU. Better luck next time!";

/// Show available commands and the current time.
pub fn help_handler(world: &GameWorld, view: &mut View) {
    view.push(ViewItem::Help {
        commands: world.commands.names().map(str::to_string).collect(),
        time: current_time(),
    });
}

/// Quit the game.
pub fn quit_handler(world: &mut GameWorld, view: &mut View) {
    info!(
        "player quit with {} calories still needed",
        world.calories_needed
    );
    info!("ending inventory:");
    world
        .player
        .inventory
        .iter()
        .for_each(|item| info!("- {}", item.name()));
    world.in_progress = false;
    view.push(ViewItem::EngineMessage("Quitting the game. Goodbye!".into()));
}

/// Push the closing banner: success iff the calorie goal was met.
pub fn game_over_handler(world: &GameWorld, view: &mut View) {
    let outcome = world.outcome();
    let message = match outcome {
        Outcome::Victory => format!(
            "Congratulations! The {} has enough calories to save GVSU!",
            world.recipient
        ),
        Outcome::Defeat => DEFEAT_MESSAGE.to_string(),
    };
    info!("game over: {outcome:?}");
    view.push(ViewItem::GameOver { outcome, message });
}

/// Local wall-clock time, or UTC when the local offset can't be determined.
fn current_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&Rfc2822).unwrap_or_else(|e| {
        warn!("failed to format current time: {e}");
        now.to_string()
    })
}
