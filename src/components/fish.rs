//! Fish species catalog and the AI fish component.
//!
//! Every fish in the sea, the player's included, is one of seven
//! [`FishSpecies`]. A species carries a base scale (1..=7), the frame size of
//! its sprite and the requirement that unlocks it for the player.
//!
//! Sizes are small integers compared when two fish touch; the draw scale is
//! a float used only to size sprites and collision boxes.
use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Number of tiers before species sizes wrap around.
pub const TIER_CYCLE: i32 = 7;

/// Player-independent requirement to unlock a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockRequirement {
    /// Available from the first run.
    Always,
    /// Total fish eaten across all runs reaches the value.
    FishEaten(u32),
    /// A run reaches the given tier.
    Tier(i32),
    /// A run scores at least the given points.
    Points(u32),
}

impl UnlockRequirement {
    pub fn is_met(&self, total_eaten: u32, tier: i32, points: u32) -> bool {
        match *self {
            UnlockRequirement::Always => true,
            UnlockRequirement::FishEaten(n) => total_eaten >= n,
            UnlockRequirement::Tier(t) => tier >= t,
            UnlockRequirement::Points(p) => points >= p,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum FishSpecies {
    #[default]
    Grey,
    Orange,
    Red,
    Green,
    Blue,
    Yellow,
    Shark,
}

impl FishSpecies {
    pub const ALL: [FishSpecies; 7] = [
        FishSpecies::Grey,
        FishSpecies::Orange,
        FishSpecies::Red,
        FishSpecies::Green,
        FishSpecies::Blue,
        FishSpecies::Yellow,
        FishSpecies::Shark,
    ];

    /// Species whose base scale matches the tier, cycling every seven tiers.
    pub fn for_tier(tier: i32) -> FishSpecies {
        let index = (tier_size(tier) - 1) as usize;
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn base_scale(self) -> i32 {
        self.index() as i32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            FishSpecies::Grey => "GreyFish",
            FishSpecies::Orange => "OrangeFish",
            FishSpecies::Red => "RedFish",
            FishSpecies::Green => "GreenFish",
            FishSpecies::Blue => "BlueFish",
            FishSpecies::Yellow => "YellowFish",
            FishSpecies::Shark => "Shark",
        }
    }

    /// Unscaled sprite frame size in pixels.
    pub fn frame_size(self) -> Vec2 {
        match self {
            FishSpecies::Grey => Vec2::new(117.0, 75.0),
            FishSpecies::Orange => Vec2::new(171.0, 110.0),
            FishSpecies::Red => Vec2::new(195.0, 147.0),
            FishSpecies::Green => Vec2::new(247.0, 172.0),
            FishSpecies::Blue => Vec2::new(276.0, 192.0),
            FishSpecies::Yellow => Vec2::new(319.0, 226.0),
            FishSpecies::Shark => Vec2::new(357.0, 256.0),
        }
    }

    pub fn unlock_requirement(self) -> UnlockRequirement {
        match self {
            FishSpecies::Grey => UnlockRequirement::Always,
            FishSpecies::Orange => UnlockRequirement::Tier(4),
            FishSpecies::Red => UnlockRequirement::Points(1000),
            FishSpecies::Green => UnlockRequirement::FishEaten(500),
            FishSpecies::Blue => UnlockRequirement::Tier(7),
            FishSpecies::Yellow => UnlockRequirement::FishEaten(2500),
            FishSpecies::Shark => UnlockRequirement::Points(3000),
        }
    }

    /// Draw scale used when the player picks this species.
    pub fn player_scale(self) -> f32 {
        let base = self.base_scale();
        if base > 1 {
            1.0 / base as f32 + 0.25
        } else {
            1.0
        }
    }

    /// Draw scale for an AI fish of this species at `tier`.
    ///
    /// A fish one tier ahead of its species is drawn large, a fish at its
    /// own tier normal, and anything older keeps shrinking from `current`.
    pub fn draw_scale(self, tier: i32, current: f32) -> f32 {
        // (grown, native, shrink factor) per base scale
        const TABLE: [(f32, f32, f32); 7] = [
            (1.2, 0.8, 0.5),
            (1.0, 0.5, 0.5),
            (0.9, 0.4, 0.5),
            (0.9, 0.5, 0.35),
            (0.6, 0.3, 0.3),
            (0.6, 0.3, 0.3),
            (0.6, 0.3, 0.3),
        ];
        let base = self.base_scale();
        let (grown, native, shrink) = TABLE[self.index()];
        let phase = tier.rem_euclid(TIER_CYCLE);
        if phase == (base - 1).rem_euclid(TIER_CYCLE) {
            grown
        } else if phase == base.rem_euclid(TIER_CYCLE) {
            native
        } else {
            current * shrink
        }
    }
}

/// Size of a fish living at `tier`: the tier cycled into 1..=7.
pub fn tier_size(tier: i32) -> i32 {
    match tier.rem_euclid(TIER_CYCLE) {
        0 => TIER_CYCLE,
        n => n,
    }
}

/// Size given to a new fish of `species` spawned while the sea is at `tier`.
///
/// Oversized spawns belong to the next tier's species and come out one size
/// above everything else, including across the 7 -> 1 wrap.
pub fn spawn_size(species: FishSpecies, tier: i32) -> i32 {
    let size = tier_size(tier);
    let base = species.base_scale();
    if base > size || base <= size - (TIER_CYCLE - 1) {
        size + 1
    } else {
        size
    }
}

/// AI controlled fish.
#[derive(Component, Debug, Clone, Copy)]
pub struct Fish {
    pub species: FishSpecies,
    pub size: i32,
    pub draw_scale: f32,
    pub target: Vec2,
    /// Pixels moved per frame toward the target before damping.
    pub speed: f32,
    /// Seconds until the fish may release a bubble.
    pub bubble_timer: f32,
    pub flip: bool,
    pub oversized: bool,
    pub eaten: bool,
}

impl Fish {
    pub fn new(species: FishSpecies, tier: i32, position: Vec2, bubble_timer: f32) -> Self {
        let size = spawn_size(species, tier);
        Self {
            species,
            size,
            draw_scale: species.draw_scale(tier, 0.0),
            target: position,
            speed: 1.0,
            bubble_timer,
            flip: false,
            oversized: size > tier_size(tier),
            eaten: false,
        }
    }

    /// Sprite size after scaling; also the collision box size.
    pub fn scaled_size(&self) -> Vec2 {
        self.species.frame_size() * self.draw_scale
    }

    /// Shrink relative to the sea after the player reaches `tier`.
    pub fn rescale(&mut self, tier: i32) {
        let new_size = tier_size(tier);
        self.draw_scale = self.species.draw_scale(tier, self.draw_scale);
        self.size -= 1;
        if self.size > new_size {
            self.size = 1;
        }
    }

    /// Point the fish at a new target and face it.
    pub fn retarget(&mut self, from: Vec2, target: Vec2) {
        if target.x > from.x {
            self.flip = false;
        } else if target.x < from.x {
            self.flip = true;
        }
        self.target = target;
    }
}
