//! Game setup and frame loop.
//!
//! [`Game`] owns the ECS [`World`] and the update [`Schedule`]. The host
//! calls [`Game::update`] once per frame with the frame delta and
//! [`Game::draw`] with whatever surface it renders on.
//!
//! Frame order:
//! 1. expire old bus events
//! 2. screen input (title, pause, end, fish select)
//! 3. gameplay, only while playing: spawning, movement, the two
//!    coordinators (collision first), double score, despawning
//! 4. scene transition
//! 5. message buffer swap
use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::collisionbox::CollisionBox;
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::zindex::ZIndex;
use crate::events::area::observe_bubble_burst;
use crate::events::collision::observe_contact;
use crate::events::moved::EntityMoved;
use crate::events::scene::observe_scene_change;
use crate::events::tier::observe_tier_up;
use crate::resources::areacoordinator::AreaCoordinator;
use crate::resources::collisioncoordinator::CollisionCoordinator;
use crate::resources::eventbus::{CLOSE_GAME, EventBus};
use crate::resources::fishselect::FishSelectMenu;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{Binding, InputState};
use crate::resources::platform::{Platform, PlatformServices};
use crate::resources::rng::GameRng;
use crate::resources::savedata::SaveData;
use crate::resources::scenestate::{SceneState, SceneStates};
use crate::resources::screenmenu::ScreenMenu;
use crate::resources::session::Session;
use crate::resources::tiers::TierTable;
use crate::resources::worldtime::WorldTime;
use crate::systems::autopilot::Autopilot;
use crate::systems::cleanup::{despawn_bubbles_system, despawn_eaten_fish_system};
use crate::systems::collision::collision_coordinator_system;
use crate::systems::eventbus::expire_events_system;
use crate::systems::menu::{fish_select_input_system, screen_input_system};
use crate::systems::moved::{enqueue_moved_system, update_moved_messages};
use crate::systems::movement::{
    bubble_movement_system, fish_movement_system, player_control_system,
    player_movement_system,
};
use crate::systems::render::{RenderSurface, render_pass};
use crate::systems::scene::{scene_is_fish_select, scene_is_playing, scene_transition_system};
use crate::systems::session::double_score_system;
use crate::systems::spawn::{spawn_bubble_system, spawn_fish_system};
use crate::systems::time::update_world_time;
use crate::systems::triggerarea::area_coordinator_system;

pub struct Game {
    world: World,
    update: Schedule,
    running: bool,
    autopilot: Option<Autopilot>,
}

impl Game {
    /// Build the world and the schedule. `seed` makes the run reproducible.
    pub fn new(config: GameConfig, platform: impl Platform + 'static, seed: Option<u64>) -> Self {
        let mut world = World::new();
        setup_world(&mut world, config, PlatformServices::new(platform), seed);
        Self {
            world,
            update: build_schedule(),
            running: true,
            autopilot: None,
        }
    }

    /// Let the [`Autopilot`] supply input every frame.
    pub fn with_autopilot(mut self) -> Self {
        self.autopilot = Some(Autopilot::new());
        self
    }

    /// Report this frame's input. Ignored while the autopilot is on.
    pub fn set_input(&mut self, held: &[Binding], pointer: Option<Vec2>) {
        if self.autopilot.is_none() {
            self.world.resource_mut::<InputState>().update(held, pointer);
        }
    }

    /// Advance one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        if let Some(pilot) = self.autopilot.as_mut() {
            let input = pilot.next_input(&mut self.world);
            self.world
                .resource_mut::<InputState>()
                .update(&input.held, input.pointer);
        }

        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.clear_trackers();

        if self.world.resource_mut::<EventBus>().poll_and_consume(CLOSE_GAME) {
            info!("CloseGame received, stopping");
            self.running = false;
        }
    }

    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        render_pass(&mut self.world, surface);
    }

    /// Fire a named event on the bus, as a menu button would.
    pub fn fire(&mut self, name: &str) {
        self.world.resource_mut::<EventBus>().fire(name);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scene(&self) -> SceneStates {
        self.world.resource::<SceneState>().get()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Insert every resource, spawn the player and register the observers.
pub fn setup_world(
    world: &mut World,
    config: GameConfig,
    platform: PlatformServices,
    seed: Option<u64>,
) {
    let save = SaveData::load(platform.0.as_ref());
    let home = config.world_center();

    let mut scene = SceneState::new();
    scene.show_notification = save.any_notifications();

    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(seed.map_or_else(GameRng::default, GameRng::seeded));
    world.insert_resource(EventBus::with_ttl(config.event_ttl));
    world.insert_resource(Session::new(config.score, TierTable::default()));
    world.insert_resource(scene);
    world.insert_resource(FishSelectMenu::default());
    world.insert_resource(ScreenMenu::new(platform.0.is_pc()));
    world.insert_resource(CollisionCoordinator::new());
    world.insert_resource(AreaCoordinator::new());
    world.init_resource::<Messages<EntityMoved>>();

    let player = Player::new(save.current_fish, home);
    let size = player.scaled_size();
    let id = world
        .spawn((
            EntityKind::Player,
            player,
            MapPosition::from(home),
            ZIndex::PLAYER,
        ))
        .id();
    world
        .entity_mut(id)
        .insert(CollisionBox::centered(id, home, size));
    world.resource_mut::<CollisionCoordinator>().register(id);

    world.insert_resource(save);
    world.insert_resource(platform);
    world.insert_resource(config);

    world.add_observer(observe_contact);
    world.add_observer(observe_tier_up);
    world.add_observer(observe_bubble_burst);
    world.add_observer(observe_scene_change);
    // Observers must exist before the first system triggers anything.
    world.flush();
}

pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            expire_events_system,
            (
                screen_input_system,
                fish_select_input_system.run_if(scene_is_fish_select),
            ),
            (
                spawn_fish_system,
                player_control_system,
                player_movement_system,
                fish_movement_system,
                bubble_movement_system,
                spawn_bubble_system,
                enqueue_moved_system,
                collision_coordinator_system,
                area_coordinator_system,
                double_score_system,
                despawn_eaten_fish_system,
                despawn_bubbles_system,
            )
                .chain()
                .run_if(scene_is_playing),
            scene_transition_system,
            update_moved_messages,
        )
            .chain(),
    );
    update
}
