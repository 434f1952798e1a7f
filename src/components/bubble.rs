use bevy_ecs::prelude::Component;

/// Side of the square bubble sprite and its trigger area.
pub const BUBBLE_SIZE: f32 = 32.0;

/// Horizontal drift either side of the spawn point.
const DRIFT: f32 = 10.0;

/// A bubble rising to the surface. Bursting one while swimming through it
/// feeds the double-score meter.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bubble {
    /// Pixels risen per frame.
    pub speed: f32,
    pub min_x: f32,
    pub max_x: f32,
    /// -1 or 1.
    pub direction: f32,
    pub burst: bool,
}

impl Bubble {
    pub fn new(spawn_x: f32, speed: f32, direction: f32) -> Self {
        Self {
            speed,
            min_x: spawn_x - DRIFT,
            max_x: spawn_x + DRIFT,
            direction: direction.signum(),
            burst: false,
        }
    }

    /// Horizontal direction for the next frame given the current x.
    pub fn steer(&mut self, x: f32) {
        if x <= self.min_x {
            self.direction = 1.0;
        }
        if x >= self.max_x {
            self.direction = -1.0;
        }
    }
}
