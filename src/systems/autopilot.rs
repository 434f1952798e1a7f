//! Headless input driver.
//!
//! [`Autopilot`] looks at the world once per frame and produces the input a
//! player would give: it taps Accept through the menus and, while playing,
//! holds the pointer on the nearest fish it can eat, unless a bigger fish is
//! close, in which case it swims straight away from it.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::fish::Fish;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::input::Binding;
use crate::resources::scenestate::{SceneState, SceneStates};

/// Bigger fish closer than this are fled from.
const DANGER_RADIUS: f32 = 250.0;
/// How far ahead of the player the flee pointer is held.
const FLEE_REACH: f32 = 200.0;

/// Input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub held: Vec<Binding>,
    pub pointer: Option<Vec2>,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_input(&mut self, world: &mut World) -> FrameInput {
        self.frame += 1;
        // Buttons are released every other frame so each hold is a new press.
        let tap = |binding: Binding, frame: u64| FrameInput {
            held: if frame % 2 == 0 { vec![binding] } else { Vec::new() },
            pointer: None,
        };
        match world.resource::<SceneState>().get() {
            SceneStates::Title | SceneStates::End | SceneStates::FishSelect => {
                tap(Binding::Accept, self.frame)
            }
            SceneStates::Paused => tap(Binding::Pause, self.frame),
            SceneStates::Playing => FrameInput {
                held: Vec::new(),
                pointer: steer(world),
            },
        }
    }
}

/// Pointer position for the player this frame.
fn steer(world: &mut World) -> Option<Vec2> {
    let (home, size) = {
        let mut players = world.query::<(&Player, &MapPosition)>();
        let (player, position) = players.iter(world).next()?;
        (position.pos, player.size)
    };

    let mut threat: Option<(f32, Vec2)> = None;
    let mut prey: Option<(f32, Vec2)> = None;
    let mut fish = world.query::<(&Fish, &MapPosition)>();
    for (f, position) in fish.iter(world) {
        if f.eaten {
            continue;
        }
        let distance = home.distance(position.pos);
        let slot = if f.size > size { &mut threat } else { &mut prey };
        if slot.is_none_or(|(d, _)| distance < d) {
            *slot = Some((distance, position.pos));
        }
    }

    match (threat, prey) {
        (Some((d, at)), _) if d < DANGER_RADIUS => {
            let away = (home - at).normalize_or(Vec2::Y);
            Some(home + away * FLEE_REACH)
        }
        (_, Some((_, at))) => Some(at),
        _ => None,
    }
}
