//! Game configuration resource.
//!
//! Manages the tunable numbers of the sea loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 1920
//! height = 1080
//! top_margin = 140
//!
//! [spawn]
//! max_fish = 20
//! big_fish_chance = 5
//! max_big_fish = 5
//!
//! [score]
//! points_per_fish = 10
//! double_score_bonus = 40
//! bubbles_for_double = 10
//! double_score_seconds = 10.0
//! double_score_extension = 0.5
//!
//! [events]
//! ttl_seconds = 1.0
//!
//! [save]
//! path = ./fish.sav
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::info;
use std::path::PathBuf;

use super::session::ScoreRules;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: u32 = 1920;
const DEFAULT_WORLD_HEIGHT: u32 = 1080;
const DEFAULT_TOP_MARGIN: u32 = 140;
const DEFAULT_MAX_FISH: u32 = 20;
const DEFAULT_BIG_FISH_CHANCE: u32 = 5;
const DEFAULT_MAX_BIG_FISH: u32 = 5;
const DEFAULT_EVENT_TTL: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_SAVE_PATH: &str = "./fish.sav";

/// Game configuration resource.
///
/// Stores the play field size, spawn policy, scoring rules and file paths.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Play field width in pixels.
    pub world_width: u32,
    /// Play field height in pixels.
    pub world_height: u32,
    /// Band at the top of the screen reserved for the HUD; fish stay below it.
    pub top_margin: u32,
    /// Most fish alive at once, player excluded.
    pub max_fish: u32,
    /// Percent chance for a spawn to be an oversized fish.
    pub big_fish_chance: u32,
    /// Most oversized fish outstanding at once.
    pub max_big_fish: u32,
    pub score: ScoreRules,
    /// Seconds an unconsumed named event stays on the bus.
    pub event_ttl: f32,
    /// Where the desktop platform keeps the save file.
    pub save_path: PathBuf,
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
            top_margin: DEFAULT_TOP_MARGIN,
            max_fish: DEFAULT_MAX_FISH,
            big_fish_chance: DEFAULT_BIG_FISH_CHANCE,
            max_big_fish: DEFAULT_MAX_BIG_FISH,
            score: ScoreRules::default(),
            event_ttl: DEFAULT_EVENT_TTL,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
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
        if let Some(margin) = config.getuint("world", "top_margin").ok().flatten() {
            self.top_margin = margin as u32;
        }

        // [spawn] section
        if let Some(max) = config.getuint("spawn", "max_fish").ok().flatten() {
            self.max_fish = max as u32;
        }
        if let Some(chance) = config.getuint("spawn", "big_fish_chance").ok().flatten() {
            self.big_fish_chance = (chance as u32).min(100);
        }
        if let Some(max) = config.getuint("spawn", "max_big_fish").ok().flatten() {
            self.max_big_fish = max as u32;
        }

        // [score] section
        if let Some(points) = config.getuint("score", "points_per_fish").ok().flatten() {
            self.score.points_per_fish = points as u32;
        }
        if let Some(bonus) = config.getuint("score", "double_score_bonus").ok().flatten() {
            self.score.double_score_bonus = bonus as u32;
        }
        if let Some(bubbles) = config.getuint("score", "bubbles_for_double").ok().flatten() {
            self.score.bubbles_for_double = bubbles as u32;
        }
        if let Some(secs) = config.getfloat("score", "double_score_seconds").ok().flatten() {
            self.score.double_score_seconds = secs as f32;
        }
        if let Some(secs) = config.getfloat("score", "double_score_extension").ok().flatten() {
            self.score.double_score_extension = secs as f32;
        }

        // [events] section
        if let Some(ttl) = config.getfloat("events", "ttl_seconds").ok().flatten() {
            self.event_ttl = ttl as f32;
        }

        // [save] section
        if let Some(path) = config.get("save", "path") {
            self.save_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} sea, max_fish={}, big_fish={}%/{}, event_ttl={}s, save={:?}",
            self.world_width,
            self.world_height,
            self.max_fish,
            self.big_fish_chance,
            self.max_big_fish,
            self.event_ttl,
            self.save_path
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
        config.set("world", "top_margin", Some(self.top_margin.to_string()));

        // [spawn] section
        config.set("spawn", "max_fish", Some(self.max_fish.to_string()));
        config.set("spawn", "big_fish_chance", Some(self.big_fish_chance.to_string()));
        config.set("spawn", "max_big_fish", Some(self.max_big_fish.to_string()));

        // [score] section
        let score = &self.score;
        config.set("score", "points_per_fish", Some(score.points_per_fish.to_string()));
        config.set("score", "double_score_bonus", Some(score.double_score_bonus.to_string()));
        config.set("score", "bubbles_for_double", Some(score.bubbles_for_double.to_string()));
        config.set("score", "double_score_seconds", Some(score.double_score_seconds.to_string()));
        config.set(
            "score",
            "double_score_extension",
            Some(score.double_score_extension.to_string()),
        );

        // [events] section
        config.set("events", "ttl_seconds", Some(self.event_ttl.to_string()));

        // [save] section
        config.set("save", "path", Some(self.save_path.display().to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Size of the play field.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width as f32, self.world_height as f32)
    }

    /// Where the player starts every run.
    pub fn world_center(&self) -> Vec2 {
        self.world_size() * 0.5
    }

    /// Clamp a target so it stays inside the swimmable part of the field.
    pub fn clamp_to_sea(&self, point: Vec2) -> Vec2 {
        point.clamp(
            Vec2::new(0.0, self.top_margin as f32),
            self.world_size(),
        )
    }
}
