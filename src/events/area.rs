//! Trigger-area events.
//!
//! The [`area_coordinator_system`] triggers [`AreaEnteredEvent`] and
//! [`AreaExitedEvent`] for every membership change. The only area users in
//! the sea are bubbles: [`observe_bubble_burst`] bursts a bubble as soon as
//! the player swims into it.
//!
//! [`area_coordinator_system`]: crate::systems::triggerarea::area_coordinator_system
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bubble::Bubble;
use crate::components::kind::EntityKind;
use crate::resources::session::Session;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaEnteredEvent {
    /// Owner of the area.
    pub area: Entity,
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaExitedEvent {
    pub area: Entity,
    pub entity: Entity,
}

/// Burst a bubble the player entered and feed the double-score meter.
pub fn observe_bubble_burst(
    trigger: On<AreaEnteredEvent>,
    kinds: Query<&EntityKind>,
    mut bubbles: Query<&mut Bubble>,
    mut session: ResMut<Session>,
) {
    let AreaEnteredEvent { area, entity } = *trigger.event();
    if kinds.get(entity).ok() != Some(&EntityKind::Player) {
        return;
    }
    let Ok(mut bubble) = bubbles.get_mut(area) else {
        return;
    };
    if bubble.burst {
        return;
    }
    bubble.burst = true;
    session.on_bubble_burst();
    debug!(
        "bubble burst: {} toward double score",
        session.bubbles_burst()
    );
}
