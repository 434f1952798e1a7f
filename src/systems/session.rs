use bevy_ecs::prelude::*;

use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;

/// Run the double-score meter down by the frame delta.
pub fn double_score_system(time: Res<WorldTime>, mut session: ResMut<Session>) {
    session.tick_double_score(time.delta);
}
