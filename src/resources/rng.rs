use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Shared random source for spawning and fish wandering.
///
/// Seed it to replay a run exactly.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub Rng);

impl Default for GameRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Percent roll: true `percent` times out of a hundred.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.0.u32(0..100) < percent
    }
}
