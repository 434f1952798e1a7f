//! Draw order for the sea.
//!
//! Entities with higher [`ZIndex`] values are drawn later, on top of lower
//! ones. Bubbles sit behind the fish and the player swims in front of all.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BUBBLE: ZIndex = ZIndex(0);
    pub const FISH: ZIndex = ZIndex(10);
    pub const PLAYER: ZIndex = ZIndex(20);
}
