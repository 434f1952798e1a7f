use bevy_ecs::prelude::*;

use crate::resources::eventbus::EventBus;
use crate::resources::worldtime::WorldTime;

/// Advance the bus clock and drop events past their TTL.
///
/// Runs first in the frame, in every scene state.
pub fn expire_events_system(time: Res<WorldTime>, mut bus: ResMut<EventBus>) {
    bus.tick(time.elapsed);
}
