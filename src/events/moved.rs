use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// An entity changed position this frame.
///
/// Written by the movement systems, drained into both coordinators by
/// [`enqueue_moved_system`](crate::systems::moved::enqueue_moved_system).
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMoved {
    pub entity: Entity,
}
