#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GVZORK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod error;
pub mod item;
pub mod loader;
pub mod location;
pub mod npc;
pub mod player;
pub mod random;
pub mod repl;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::GameConfig;
pub use error::WorldError;
pub use item::{Item, ItemHolder};
pub use loader::{WorldBuilder, build_campus_world, load_world};
pub use location::{Location, LocationId};
pub use npc::Npc;
pub use player::Player;
pub use repl::run_repl;
pub use view::{View, ViewItem};
pub use world::{GameWorld, Outcome, WorldObject};
