use bevy_ecs::prelude::*;

use crate::components::collisionbox::CollisionBox;
use crate::components::triggerarea::TriggerArea;
use crate::events::area::{AreaEnteredEvent, AreaExitedEvent};
use crate::resources::areacoordinator::{AreaCoordinator, AreaTransition};

/// Diff this frame's moved entities against every registered area and
/// trigger the matching enter or exit events.
pub fn area_coordinator_system(
    mut commands: Commands,
    mut coordinator: ResMut<AreaCoordinator>,
    areas: Query<&TriggerArea>,
    boxes: Query<&CollisionBox>,
) {
    let transitions = coordinator.tick(
        |owner| areas.get(owner).ok().copied(),
        |entity| boxes.get(entity).ok().copied(),
    );
    for transition in transitions {
        match transition {
            AreaTransition::Entered { area, entity } => {
                commands.trigger(AreaEnteredEvent { area, entity });
            }
            AreaTransition::Exited { area, entity } => {
                commands.trigger(AreaExitedEvent { area, entity });
            }
        }
    }
}
