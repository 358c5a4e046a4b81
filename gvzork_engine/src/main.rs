#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** GVZork **
//! Feed the Elf before GVSU is lost.

use gvzork_engine::repl::InputManager;
use gvzork_engine::{GVZORK_VERSION, View, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building GVZork v{GVZORK_VERSION} world...");
    let mut world = load_world().context("while building the campus world")?;
    info!("world built successfully.");

    let mut view = View::new();
    let mut input = InputManager::new(world.commands.names());
    let outcome = run_repl(&mut world, &mut view, &mut input)?;
    info!("session ended: {outcome:?}");
    Ok(())
}
