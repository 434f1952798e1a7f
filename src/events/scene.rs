//! Scene transition event and observer.
//!
//! [`scene_transition_system`] asks the [`SceneState`] machine for the next
//! screen each frame. When the screen changes it triggers a
//! [`SceneChangedEvent`], and [`observe_scene_change`] applies the side
//! effects tied to the cause of the transition: resetting the run, writing
//! the save, showing ads, refreshing the new-fish badge.
//!
//! This keeps the state machine itself free of ECS access and avoids
//! borrowing conflicts with the gameplay systems.
//!
//! [`scene_transition_system`]: crate::systems::scene::scene_transition_system
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::collisionbox::CollisionBox;
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::areacoordinator::AreaCoordinator;
use crate::resources::collisioncoordinator::CollisionCoordinator;
use crate::resources::fishselect::FishSelectMenu;
use crate::resources::platform::PlatformServices;
use crate::resources::savedata::SaveData;
use crate::resources::scenestate::{SceneState, SceneStates, Transition, TransitionCause};
use crate::resources::session::Session;

/// The scene moved to another screen.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneChangedEvent(pub Transition);

/// Observer that applies the side effects of a scene transition.
///
/// - `Started` and a restart from the end screen preload an ad; every
///   `Restarted` clears the sea and starts a fresh run.
/// - `GameOver` unlocks earned species, records best stats, writes the save
///   and shows an ad.
/// - `OpenedFishSelect` puts the cursor on the current species;
///   `ClosedFishSelect` resets the player as the chosen species and writes
///   the save.
#[allow(clippy::too_many_arguments)]
pub fn observe_scene_change(
    trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    sea: Query<(Entity, &EntityKind)>,
    mut players: Query<(&mut Player, &mut MapPosition, &mut CollisionBox)>,
    mut scene: ResMut<SceneState>,
    mut session: ResMut<Session>,
    mut save: ResMut<SaveData>,
    mut menu: ResMut<FishSelectMenu>,
    mut platform: ResMut<PlatformServices>,
    mut collisions: ResMut<CollisionCoordinator>,
    mut areas: ResMut<AreaCoordinator>,
) {
    let SceneChangedEvent(transition) = *trigger.event();
    info!(
        "Scene {:?} -> {:?} ({:?})",
        transition.from, transition.to, transition.cause
    );

    match transition.cause {
        TransitionCause::Started => {
            platform.0.prepare_ad();
        }
        TransitionCause::Restarted => {
            // Only a run that ended shows an ad; restarting from pause does not.
            if transition.from == SceneStates::End {
                platform.0.prepare_ad();
            }
            for (entity, kind) in sea.iter() {
                if *kind == EntityKind::Player {
                    continue;
                }
                collisions.deregister(entity);
                areas.deregister(entity);
                areas.forget(entity);
                commands.entity(entity).despawn();
            }
            session.reset();
            reset_players(&mut players, &save);
        }
        TransitionCause::GameOver => {
            let (tier, points) = (session.tier(), session.points());
            save.unlock_earned(tier, points);
            save.record_best(tier, points);
            if let Err(e) = save.save(platform.0.as_mut()) {
                warn!("{}", e);
            }
            platform.0.show_ad();
            scene.show_notification = save.any_notifications();
        }
        TransitionCause::OpenedFishSelect => {
            menu.open(&mut save);
        }
        TransitionCause::ClosedFishSelect => {
            reset_players(&mut players, &save);
            scene.show_notification = save.any_notifications();
            if let Err(e) = save.save(platform.0.as_mut()) {
                warn!("{}", e);
            }
        }
        TransitionCause::Paused | TransitionCause::Resumed => {}
    }
}

/// Put the player back home as the species chosen in the save.
fn reset_players(
    players: &mut Query<(&mut Player, &mut MapPosition, &mut CollisionBox)>,
    save: &SaveData,
) {
    for (mut player, mut position, mut cbox) in players.iter_mut() {
        player.reset(save.current_fish);
        position.pos = player.home;
        *cbox = CollisionBox::centered(cbox.owner, player.home, player.scaled_size());
    }
}
