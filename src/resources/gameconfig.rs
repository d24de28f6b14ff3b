//! Game configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 1024
//! height = 768
//!
//! [simulation]
//! tick_rate = 60
//!
//! [player]
//! speed = 5.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: u32 = 1024;
const DEFAULT_WORLD_HEIGHT: u32 = 768;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_PLAYER_SPEED: f32 = 5.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the world boundary size, the fixed simulation rate, and the player
/// movement speed. Missing file or missing keys fall back to defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// World boundary width in world units.
    pub world_width: u32,
    /// World boundary height in world units.
    pub world_height: u32,
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: u32,
    /// World units the player moves per tick for a unit input delta.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            tick_rate: DEFAULT_TICK_RATE,
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [world] section
        if let Some(width) = config.getuint("world", "width").ok().flatten() {
            self.world_width = width as u32;
        }
        if let Some(height) = config.getuint("world", "height").ok().flatten() {
            self.world_height = height as u32;
        }

        // [simulation] section
        if let Some(rate) = config.getuint("simulation", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        info!(
            "Loaded config: {}x{} world, {} ticks/s, player speed {}",
            self.world_width, self.world_height, self.tick_rate, self.player_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [world] section
        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));

        // [simulation] section
        config.set(
            "simulation",
            "tick_rate",
            Some(self.tick_rate.to_string()),
        );

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the world boundary size.
    pub fn world_size(&self) -> (u32, u32) {
        (self.world_width, self.world_height)
    }
}
