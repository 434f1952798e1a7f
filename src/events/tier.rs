//! Tier-up event.
//!
//! Fired by eat resolution when the player has eaten enough fish to grow.
//! The whole sea is rescaled relative to the player: every fish shrinks one
//! size and gets a new sprite scale and box, the player takes the size of
//! the new tier.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::collisionbox::CollisionBox;
use crate::components::fish::Fish;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierUpEvent {
    /// Tier just reached.
    pub tier: i32,
}

pub fn observe_tier_up(
    trigger: On<TierUpEvent>,
    mut fish: Query<(&mut Fish, &mut CollisionBox, &MapPosition)>,
    mut players: Query<&mut Player>,
) {
    let tier = trigger.event().tier;
    for (mut f, mut cbox, position) in fish.iter_mut() {
        f.rescale(tier);
        *cbox = CollisionBox::centered(cbox.owner, position.pos, f.scaled_size());
    }
    for mut player in players.iter_mut() {
        player.grow_to(tier);
    }
}
