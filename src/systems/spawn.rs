//! Spawning systems.
//!
//! - [`spawn_fish_system`] tops the sea up to the configured fish cap, one
//!   fish per frame, sometimes with an oversized fish from the next tier.
//! - [`spawn_bubble_system`] counts down each fish's bubble timer and lets
//!   it release a bubble.
//!
//! Every spawned entity registers its box or area with the coordinators
//! before the frame ends; [`despawn`](super::cleanup) does the reverse.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::bubble::{BUBBLE_SIZE, Bubble};
use crate::components::collisionbox::CollisionBox;
use crate::components::fish::{Fish, FishSpecies};
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::triggerarea::TriggerArea;
use crate::components::zindex::ZIndex;
use crate::resources::areacoordinator::AreaCoordinator;
use crate::resources::collisioncoordinator::CollisionCoordinator;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;

/// How far outside the screen new fish appear.
const SPAWN_MARGIN: f32 = 300.0;
/// Seconds between bubbles once a fish released its first one.
const BUBBLE_INTERVAL: f32 = 5.0;

/// Spawn a fish of `species` for a sea at `tier`, with its box registered.
pub fn spawn_fish(
    commands: &mut Commands,
    collisions: &mut CollisionCoordinator,
    species: FishSpecies,
    tier: i32,
    position: Vec2,
    bubble_timer: f32,
) -> Entity {
    let fish = Fish::new(species, tier, position, bubble_timer);
    let size = fish.scaled_size();
    let id = commands
        .spawn((
            EntityKind::Fish,
            fish,
            MapPosition::from(position),
            ZIndex::FISH,
        ))
        .id();
    commands
        .entity(id)
        .insert(CollisionBox::centered(id, position, size));
    collisions.register(id);
    id
}

/// Spawn a bubble at `position` with its area registered.
pub fn spawn_bubble(
    commands: &mut Commands,
    areas: &mut AreaCoordinator,
    position: Vec2,
    speed: f32,
    direction: f32,
) -> Entity {
    let id = commands
        .spawn((
            EntityKind::Bubble,
            Bubble::new(position.x, speed, direction),
            MapPosition::from(position),
            TriggerArea::square(position, BUBBLE_SIZE),
            ZIndex::BUBBLE,
        ))
        .id();
    areas.register(id);
    id
}

pub fn spawn_fish_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut session: ResMut<Session>,
    mut collisions: ResMut<CollisionCoordinator>,
    fish: Query<(), With<Fish>>,
) {
    if fish.iter().count() >= config.max_fish as usize {
        return;
    }

    let mut spawn_tier = session.tier();
    if rng.chance(config.big_fish_chance)
        && session.big_fish_count() < config.max_big_fish as f32
    {
        spawn_tier += 1;
        session.on_big_fish_spawned();
        info!("oversized fish from tier {}", spawn_tier);
    }

    let x = if rng.0.bool() {
        -SPAWN_MARGIN
    } else {
        config.world_width as f32 + SPAWN_MARGIN
    };
    let y = rng.0.u32(0..config.world_height.max(1)) as f32;
    let bubble_timer = 6.0 + rng.0.f32() * 4.0;

    spawn_fish(
        &mut commands,
        &mut collisions,
        FishSpecies::for_tier(spawn_tier),
        session.tier(),
        Vec2::new(x, y),
        bubble_timer,
    );
}

/// Count down bubble timers; an expired timer has a one-in-ten chance per
/// frame to release a bubble and restart.
pub fn spawn_bubble_system(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut rng: ResMut<GameRng>,
    mut areas: ResMut<AreaCoordinator>,
    mut fish: Query<(&mut Fish, &MapPosition)>,
) {
    for (mut f, position) in fish.iter_mut() {
        if f.eaten {
            continue;
        }
        f.bubble_timer -= time.delta;
        if f.bubble_timer > 0.0 || rng.0.u32(0..10) != 9 {
            continue;
        }
        let speed = rng.0.u32(2..5) as f32;
        let direction = if rng.0.bool() { -1.0 } else { 1.0 };
        spawn_bubble(&mut commands, &mut areas, position.pos, speed, direction);
        f.bubble_timer = BUBBLE_INTERVAL;
        debug!("bubble released at {:?}", position.pos);
    }
}
