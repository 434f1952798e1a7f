use bevy_ecs::prelude::Component;

/// Which gameplay rules apply to an entity.
///
/// Collision handling is looked up by kind, see
/// [`contact_handler`](crate::events::collision::contact_handler).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Fish,
    Player,
    Bubble,
}
