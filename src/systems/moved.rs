//! Moved-entity bookkeeping between movement and the coordinators.
use bevy_ecs::message::{MessageReader, Messages};
use bevy_ecs::prelude::*;

use crate::events::moved::EntityMoved;
use crate::resources::areacoordinator::AreaCoordinator;
use crate::resources::collisioncoordinator::CollisionCoordinator;

/// Queue every entity that moved this frame in both coordinators.
///
/// The same entity may be queued more than once; the coordinators decide
/// what repeated entries mean.
pub fn enqueue_moved_system(
    mut moved: MessageReader<EntityMoved>,
    mut collisions: ResMut<CollisionCoordinator>,
    mut areas: ResMut<AreaCoordinator>,
) {
    for EntityMoved { entity } in moved.read() {
        collisions.enqueue(*entity);
        areas.enqueue(*entity);
    }
}

/// Swap the message buffers once per frame so old messages age out.
pub fn update_moved_messages(mut messages: ResMut<Messages<EntityMoved>>) {
    messages.update();
}
