//! Game tunables and their loader.
//!
//! Values come from `config.toml` in the data directory. A missing or unreadable
//! file is not fatal: the built-in defaults are used and a warning is logged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Default number of pounds the player can carry.
pub const DEFAULT_CARRY_CAPACITY: u32 = 30;
/// Default number of calories the Elf needs.
pub const DEFAULT_CALORIE_TARGET: i32 = 500;

/// Rules that shape a play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum carried weight, in pounds.
    pub carry_capacity: u32,
    /// Calories that must be delivered to win.
    pub calorie_target: i32,
    /// Name of the location that accepts deliveries.
    pub delivery_location: String,
    /// Who receives deliveries, for messages.
    pub recipient: String,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            carry_capacity: DEFAULT_CARRY_CAPACITY,
            calorie_target: DEFAULT_CALORIE_TARGET,
            delivery_location: "Woods".to_string(),
            recipient: "Elf".to_string(),
        }
    }
}

/// Read a [`GameConfig`] from a TOML file.
///
/// # Errors
/// - on file IO error or TOML parsing error
/// - if `calorie_target` is not positive
pub fn try_load_config(toml_path: &Path) -> Result<GameConfig> {
    let raw = fs::read_to_string(toml_path)
        .with_context(|| format!("reading game config from '{}'", toml_path.display()))?;
    let config: GameConfig =
        toml::from_str(&raw).with_context(|| format!("parsing game config from '{}'", toml_path.display()))?;
    if config.calorie_target <= 0 {
        bail!(
            "calorie_target in '{}' must be positive (got {})",
            toml_path.display(),
            config.calorie_target
        );
    }
    info!("game config loaded from '{}'", toml_path.display());
    Ok(config)
}

/// Load the game config, falling back to defaults on any failure.
pub fn load_config(toml_path: &Path) -> GameConfig {
    match try_load_config(toml_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("using default game config: {e:#}");
            GameConfig::default()
        },
    }
}
