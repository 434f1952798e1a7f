use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::bounds::Bounds;

/// Fixed-size movable rectangle that reports entities entering and leaving it.
///
/// The set of entities currently inside belongs to the
/// [`AreaCoordinator`](crate::resources::areacoordinator::AreaCoordinator);
/// this component only carries the geometry. The area is anchored at its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct TriggerArea {
    pub bounds: Bounds,
}

impl TriggerArea {
    pub fn new(corner: Vec2, size: Vec2) -> Self {
        Self {
            bounds: Bounds::from_corner(corner, size),
        }
    }

    /// Square area with side `side`, as used by bubbles.
    pub fn square(corner: Vec2, side: f32) -> Self {
        Self::new(corner, Vec2::splat(side))
    }

    pub fn move_to(&mut self, corner: Vec2) {
        self.bounds.set_corner(corner);
    }
}
