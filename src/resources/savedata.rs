//! Persistent player progress.
//!
//! [`SaveData`] is the flat record written through the
//! [`Platform`](super::platform::Platform) at the end of every run: volumes,
//! best tier and points, total fish eaten, which species are unlocked and
//! which ones still need to be shown to the player. It serializes to JSON;
//! unknown or missing fields fall back to defaults so old saves keep loading.
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::platform::Platform;
use crate::components::fish::{FishSpecies, UnlockRequirement};

pub const MAX_VOLUME: u8 = 10;
pub const DEFAULT_VOLUME: u8 = 7;

/// Unlock state of one species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    pub unlocked: bool,
    /// Unlocked but not yet seen on the fish select screen.
    pub notify: bool,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub music_volume: u8,
    pub sound_volume: u8,
    /// Fish eaten over every finished run.
    pub fish_eaten: u32,
    pub best_tier: i32,
    pub best_points: u32,
    pub current_fish: FishSpecies,
    pub fish: BTreeMap<FishSpecies, UnlockRecord>,
}

impl Default for SaveData {
    fn default() -> Self {
        let fish = FishSpecies::ALL
            .iter()
            .map(|&species| {
                let record = UnlockRecord {
                    unlocked: species.unlock_requirement() == UnlockRequirement::Always,
                    notify: false,
                };
                (species, record)
            })
            .collect();
        Self {
            music_volume: DEFAULT_VOLUME,
            sound_volume: DEFAULT_VOLUME,
            fish_eaten: 0,
            best_tier: 0,
            best_points: 0,
            current_fish: FishSpecies::Grey,
            fish,
        }
    }
}

impl SaveData {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize save data: {}", e))
    }

    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("Failed to parse save data: {}", e))
    }

    /// Load through the platform; anything missing or unreadable yields the
    /// default record.
    pub fn load(platform: &dyn Platform) -> Self {
        let Some(data) = platform.load_game_data() else {
            info!("No save data, starting fresh");
            return Self::default();
        };
        match Self::from_json(&data) {
            Ok(save) => save,
            Err(e) => {
                warn!("{}; starting fresh", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, platform: &mut dyn Platform) -> Result<(), String> {
        let data = self.to_json()?;
        platform.save_data(&data)
    }

    pub fn record(&self, species: FishSpecies) -> UnlockRecord {
        self.fish.get(&species).copied().unwrap_or_default()
    }

    pub fn is_unlocked(&self, species: FishSpecies) -> bool {
        self.record(species).unlocked
    }

    /// Unlock every locked species whose requirement the run met and flag it
    /// for the fish select screen. Returns the newly unlocked species.
    pub fn unlock_earned(&mut self, tier: i32, points: u32) -> Vec<FishSpecies> {
        let total_eaten = self.fish_eaten;
        let mut unlocked = Vec::new();
        for species in FishSpecies::ALL {
            let record = self.fish.entry(species).or_default();
            if record.unlocked {
                continue;
            }
            if species.unlock_requirement().is_met(total_eaten, tier, points) {
                record.unlocked = true;
                record.notify = true;
                unlocked.push(species);
            }
        }
        if !unlocked.is_empty() {
            info!("Unlocked fish: {:?}", unlocked);
        }
        unlocked
    }

    /// Keep the best tier and points seen so far.
    pub fn record_best(&mut self, tier: i32, points: u32) {
        self.best_tier = self.best_tier.max(tier);
        self.best_points = self.best_points.max(points);
    }

    /// Choose the species for the next run. Locked species are refused.
    pub fn select_fish(&mut self, species: FishSpecies) -> bool {
        if !self.is_unlocked(species) {
            return false;
        }
        self.current_fish = species;
        true
    }

    /// The player has seen `species` on the fish select screen.
    pub fn mark_seen(&mut self, species: FishSpecies) {
        if let Some(record) = self.fish.get_mut(&species) {
            record.notify = false;
        }
    }

    pub fn any_notifications(&self) -> bool {
        self.fish.values().any(|r| r.notify)
    }

    /// Step the music volume by `step`, wrapping within 0..=10.
    pub fn step_music_volume(&mut self, step: i32) {
        self.music_volume = wrap_volume(self.music_volume, step);
    }

    pub fn step_sound_volume(&mut self, step: i32) {
        self.sound_volume = wrap_volume(self.sound_volume, step);
    }
}

fn wrap_volume(volume: u8, step: i32) -> u8 {
    (volume as i32 + step).rem_euclid(MAX_VOLUME as i32 + 1) as u8
}
