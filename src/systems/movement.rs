//! Movement systems.
//!
//! Everything in the sea swims toward a target with the damped step of
//! [`move_to_target`]. Each system moves the entity, re-anchors its box or
//! area in the same step, and writes an [`EntityMoved`] message for the
//! coordinators.
//!
//! - [`player_control_system`] – steer the player's target from input
//! - [`player_movement_system`] – move the player
//! - [`fish_movement_system`] – move fish, picking a new random target on arrival
//! - [`bubble_movement_system`] – rise and wobble bubbles
use bevy_ecs::message::MessageWriter;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::bubble::Bubble;
use crate::components::collisionbox::CollisionBox;
use crate::components::fish::Fish;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::triggerarea::TriggerArea;
use crate::events::moved::EntityMoved;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{Binding, InputState};
use crate::resources::rng::GameRng;

/// Damping divisor for [`move_to_target`]: each frame covers
/// `speed / MOVE_DAMPING` of the remaining distance.
pub const MOVE_DAMPING: f32 = 100.0;

/// One step from `from` toward `target`.
///
/// Each axis moves `(target - from) * speed / damping`, but at least one
/// pixel while any distance remains. When the result lands within `speed`
/// of the target on both axes it snaps onto the target.
pub fn move_to_target(from: Vec2, target: Vec2, speed: f32, damping: f32) -> Vec2 {
    let step = |d: f32| {
        let m = d * speed / damping;
        if m.abs() > 1.0 { m } else { sign(m) }
    };
    let diff = target - from;
    let next = from + Vec2::new(step(diff.x), step(diff.y));
    if (next - target).abs().max_element() <= speed {
        target
    } else {
        next
    }
}

/// -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Move the player's target with held directions and the pointer.
pub fn player_control_system(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut players: Query<(&mut Player, &MapPosition)>,
) {
    for (mut player, position) in players.iter_mut() {
        let speed = player.speed;
        let mut target = player.target;
        if input.held(Binding::Up) {
            target.y -= speed;
        }
        if input.held(Binding::Down) {
            target.y += speed;
        }
        if input.held(Binding::Left) {
            target.x -= speed;
        }
        if input.held(Binding::Right) {
            target.x += speed;
        }

        if input.pointer_held() {
            let toward = input.pointer_position - position.pos;
            target.x += sign(toward.x) * speed;
            target.y += sign(toward.y) * speed;
        }

        player.target = config.clamp_to_sea(target);
        if player.target.x > position.pos.x {
            player.flip = false;
        } else if player.target.x < position.pos.x {
            player.flip = true;
        }
    }
}

/// Move the player and report it as moved every frame, even when idle.
pub fn player_movement_system(
    mut players: Query<(Entity, &Player, &mut MapPosition, &mut CollisionBox)>,
    mut moved: MessageWriter<EntityMoved>,
) {
    for (entity, player, mut position, mut cbox) in players.iter_mut() {
        if position.pos != player.target {
            position.pos = move_to_target(position.pos, player.target, player.speed, MOVE_DAMPING);
        }
        cbox.move_to(position.pos);
        moved.write(EntityMoved { entity });
    }
}

/// Swim every live fish toward its target; fish that arrived pick a new
/// random target below the HUD band.
pub fn fish_movement_system(
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut fish: Query<(Entity, &mut Fish, &mut MapPosition, &mut CollisionBox)>,
    mut moved: MessageWriter<EntityMoved>,
) {
    let width = config.world_width.max(1);
    let top = config.top_margin;
    let bottom = config.world_height.max(top + 1);
    for (entity, mut f, mut position, mut cbox) in fish.iter_mut() {
        if f.eaten {
            continue;
        }
        if position.pos != f.target {
            position.pos = move_to_target(position.pos, f.target, f.speed, MOVE_DAMPING);
        } else {
            let target = Vec2::new(
                rng.0.u32(0..width) as f32,
                rng.0.u32(top..bottom) as f32,
            );
            f.retarget(position.pos, target);
        }
        cbox.move_to(position.pos);
        moved.write(EntityMoved { entity });
    }
}

/// Rise bubbles by their speed and wobble them one pixel per frame.
pub fn bubble_movement_system(
    mut bubbles: Query<(&mut Bubble, &mut MapPosition, &mut TriggerArea)>,
) {
    for (mut bubble, mut position, mut area) in bubbles.iter_mut() {
        position.pos.y -= bubble.speed;
        position.pos.x += bubble.direction;
        let x = position.pos.x;
        bubble.steer(x);
        area.move_to(position.pos);
    }
}
