//! Axis-aligned rectangle shared by collision boxes and trigger areas.
//!
//! [`Bounds`] stores the top-left corner and the size in world pixels. It is
//! a plain value type; ownership and membership live in the components that
//! embed it.
use glam::Vec2;

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from its top-left corner and its size.
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner.x, corner.y, size.x, size.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    /// Move the top-left corner, keeping the size.
    pub fn set_corner(&mut self, corner: Vec2) {
        self.x = corner.x;
        self.y = corner.y;
    }

    /// Inclusive overlap test: rectangles that only share an edge or a
    /// corner intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }

    /// Whether a point lies inside or on the border.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }
}
