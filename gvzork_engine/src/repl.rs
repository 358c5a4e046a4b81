//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`GameWorld`].

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod npc;
pub mod system;

pub use input::{InputEvent, InputManager, LineSource, ScriptedInput};
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use npc::*;
pub use system::*;

use crate::command::{Command, CommandKind, parse_command};
use crate::style::GameStyle;
use crate::world::{GameWorld, Outcome};
use crate::{View, ViewItem, WorldObject};

use anyhow::Result;
use log::{info, warn};

const PROMPT: &str = "What is your command? ";

/// Run the main read–eval–print loop until the game ends.
///
/// The loop ends when a handler clears `in_progress` (goal met or `quit`) or when
/// input runs out. Returns how the session was judged.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing location for the player.
pub fn run_repl(world: &mut GameWorld, view: &mut View, input: &mut impl LineSource) -> Result<Outcome> {
    let delivery_location = world.location(world.delivery_location)?.name().to_string();
    view.push(ViewItem::Welcome {
        recipient: world.recipient.clone(),
        delivery_location,
    });

    let mut turn: usize = 0;
    while world.in_progress {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        view.push(ViewItem::LocationSummary(world.location_summary(world.player.location)?));
        view.flush();

        let line = match input.read_line(&PROMPT.prompt_style().to_string()) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => {
                info!("input closed; leaving the game");
                break;
            },
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".into()));
                continue;
            },
            Err(err) => {
                warn!("failed to read input ({err}); leaving the game");
                break;
            },
        };

        match parse_command(&world.commands, &line) {
            Command::Blank => {},
            Command::Unknown(word) => unknown_command(view, &word),
            Command::Known { kind, arg } => dispatch(world, view, kind, arg.as_deref())?,
        }
    }

    game_over_handler(world, view);
    view.flush();
    Ok(world.outcome())
}

/// Run the handler registered for `kind` with the player's first argument.
///
/// # Errors
/// - Propagates handler failures (broken world invariants, not player mistakes).
pub fn dispatch(world: &mut GameWorld, view: &mut View, kind: CommandKind, arg: Option<&str>) -> Result<()> {
    info!(
        "dispatching '{}' (arg: {arg:?}) at {}",
        kind.keyword(),
        world.player_location_ref()?.name()
    );
    match kind {
        CommandKind::Help => help_handler(world, view),
        CommandKind::Talk => talk_handler(world, view, arg)?,
        CommandKind::Meet => meet_handler(world, view, arg)?,
        CommandKind::Take => take_handler(world, view, arg)?,
        CommandKind::Give => give_handler(world, view, arg)?,
        CommandKind::Go => go_handler(world, view, arg)?,
        CommandKind::Items => items_handler(world, view),
        CommandKind::Look => look_handler(world, view)?,
        CommandKind::Quit => quit_handler(world, view),
        CommandKind::Teleport => teleport_handler(world, view)?,
        CommandKind::Magic => magic_handler(world, view),
    }
    Ok(())
}

/// Feedback to player when the first word isn't a command.
pub fn unknown_command(view: &mut View, word: &str) {
    info!("unknown command '{word}'");
    view.push(ViewItem::Error(
        "Unknown command. Type 'help' for a list of commands.".into(),
    ));
}
