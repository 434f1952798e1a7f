use bevy_ecs::prelude::*;

use crate::components::collisionbox::CollisionBox;
use crate::events::collision::CollisionEvent;
use crate::resources::collisioncoordinator::CollisionCoordinator;

/// Scan this frame's moved entities against every registered box and
/// trigger a [`CollisionEvent`] for each contact, in scan order.
pub fn collision_coordinator_system(
    mut commands: Commands,
    mut coordinator: ResMut<CollisionCoordinator>,
    boxes: Query<&CollisionBox>,
) {
    let contacts = coordinator.tick(|entity| boxes.get(entity).ok().copied());
    for contact in contacts {
        commands.trigger(CollisionEvent {
            mover: contact.mover,
            owner: contact.owner,
        });
    }
}
