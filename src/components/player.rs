use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::fish::{FishSpecies, tier_size};

/// The player-controlled fish.
///
/// The player eats anything its own size or smaller, and grows one size per
/// tier reached during a run.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub species: FishSpecies,
    pub size: i32,
    pub draw_scale: f32,
    pub target: Vec2,
    pub speed: f32,
    /// Fish eaten during the current run.
    pub fish_eaten: u32,
    /// Where the player starts every run.
    pub home: Vec2,
    pub flip: bool,
}

impl Player {
    pub const SPEED: f32 = 4.0;

    pub fn new(species: FishSpecies, home: Vec2) -> Self {
        Self {
            species,
            size: 1,
            draw_scale: species.player_scale(),
            target: home,
            speed: Self::SPEED,
            fish_eaten: 0,
            home,
            flip: false,
        }
    }

    /// Back to the start of a run, possibly as a different species.
    pub fn reset(&mut self, species: FishSpecies) {
        *self = Self::new(species, self.home);
    }

    pub fn scaled_size(&self) -> Vec2 {
        self.species.frame_size() * self.draw_scale
    }

    /// Grow to match the sea after reaching `tier`.
    pub fn grow_to(&mut self, tier: i32) {
        self.size = tier_size(tier);
    }
}
