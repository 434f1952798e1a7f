use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

use super::bounds::Bounds;

/// Axis-aligned collision rectangle bound to its owning entity.
///
/// The rectangle origin always equals the owner position plus `offset`.
/// Movement systems call [`CollisionBox::move_to`] in the same step that
/// updates the owner's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CollisionBox {
    pub owner: Entity,
    pub offset: Vec2,
    pub bounds: Bounds,
}

impl CollisionBox {
    /// Create a box of `size` for `owner` placed at `position + offset`.
    pub fn new(owner: Entity, position: Vec2, offset: Vec2, size: Vec2) -> Self {
        Self {
            owner,
            offset,
            bounds: Bounds::from_corner(position + offset, size),
        }
    }

    /// Box of `size` centred on the owner position.
    pub fn centered(owner: Entity, position: Vec2, size: Vec2) -> Self {
        Self::new(owner, position, -size * 0.5, size)
    }

    /// Re-anchor the rectangle to a new owner position.
    pub fn move_to(&mut self, position: Vec2) {
        self.bounds.set_corner(position + self.offset);
    }

    /// True when `other` belongs to a different entity and the rectangles
    /// overlap (touching edges included).
    pub fn intersects(&self, other: &CollisionBox) -> bool {
        self.owner != other.owner && self.bounds.intersects(&other.bounds)
    }
}
