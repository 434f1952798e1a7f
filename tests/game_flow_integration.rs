//! Whole-game integration tests: scene flow, eat resolution, tier ups and
//! persistence, driven through [`Game`] with an in-memory platform.

use bevy_ecs::prelude::*;
use glam::Vec2;

use biggerfish::components::bubble::Bubble;
use biggerfish::components::collisionbox::CollisionBox;
use biggerfish::components::fish::{Fish, FishSpecies};
use biggerfish::components::kind::EntityKind;
use biggerfish::components::mapposition::MapPosition;
use biggerfish::components::player::Player;
use biggerfish::components::zindex::ZIndex;
use biggerfish::game::Game;
use biggerfish::resources::areacoordinator::AreaCoordinator;
use biggerfish::resources::collisioncoordinator::CollisionCoordinator;
use biggerfish::resources::eventbus::{
    CLOSE_PAUSE_MENU, EventBus, GAME_OVER, OPEN_FISH_SELECT, RESTART,
};
use biggerfish::resources::gameconfig::GameConfig;
use biggerfish::resources::input::Binding;
use biggerfish::resources::layout::{ButtonRow, ScreenLayout};
use biggerfish::resources::platform::MemoryPlatform;
use biggerfish::resources::savedata::SaveData;
use biggerfish::resources::scenestate::{SceneState, SceneStates};
use biggerfish::resources::session::Session;
use biggerfish::systems::render::CommandList;
use biggerfish::systems::spawn::spawn_bubble;

const DT: f32 = 1.0 / 60.0;
const HOME: Vec2 = Vec2::new(960.0, 540.0);

/// A game with spawning disabled so tests place every fish themselves.
fn quiet_game() -> (Game, MemoryPlatform) {
    let mut config = GameConfig::new();
    config.max_fish = 0;
    let platform = MemoryPlatform::new();
    let game = Game::new(config, platform.clone(), Some(7));
    (game, platform)
}

fn playing_game() -> (Game, MemoryPlatform) {
    let (mut game, platform) = quiet_game();
    game.fire(RESTART);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
    (game, platform)
}

fn add_fish(game: &mut Game, species: FishSpecies, tier: i32, at: Vec2) -> Entity {
    let world = game.world_mut();
    let fish = Fish::new(species, tier, at, 100.0);
    let size = fish.scaled_size();
    let e = world
        .spawn((EntityKind::Fish, fish, MapPosition::from(at), ZIndex::FISH))
        .id();
    world
        .entity_mut(e)
        .insert(CollisionBox::centered(e, at, size));
    world.resource_mut::<CollisionCoordinator>().register(e);
    e
}

fn player(game: &mut Game) -> (Entity, Player) {
    let world = game.world_mut();
    let mut q = world.query::<(Entity, &Player)>();
    let (e, p) = q.single(world).unwrap();
    (e, *p)
}

fn fish_count(game: &mut Game) -> usize {
    let world = game.world_mut();
    world.query::<&Fish>().iter(world).count()
}

#[test]
fn starts_on_title_and_restart_plays() {
    let (mut game, platform) = quiet_game();
    assert_eq!(game.scene(), SceneStates::Title);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Title);

    game.fire(RESTART);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
    assert_eq!(platform.store().ads_prepared, 1);
}

#[test]
fn accept_on_title_starts_the_run() {
    let (mut game, _) = quiet_game();
    game.set_input(&[Binding::Accept], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
}

#[test]
fn player_eats_same_size_fish() {
    let (mut game, _) = playing_game();
    let prey = add_fish(&mut game, FishSpecies::Grey, 1, HOME);
    game.update(DT);

    assert!(game.world().get_entity(prey).is_err());
    let (_, p) = player(&mut game);
    assert_eq!(p.fish_eaten, 1);
    let session = game.world().resource::<Session>();
    assert_eq!(session.points(), 10);
    assert!(!game.world().resource::<CollisionCoordinator>().is_registered(prey));
}

#[test]
fn bigger_fish_ends_the_run_once() {
    let (mut game, platform) = playing_game();
    add_fish(&mut game, FishSpecies::Grey, 1, HOME);
    add_fish(&mut game, FishSpecies::Orange, 1, HOME + Vec2::new(2.0, 0.0));
    add_fish(&mut game, FishSpecies::Orange, 1, HOME - Vec2::new(2.0, 0.0));
    game.update(DT);

    assert_eq!(game.scene(), SceneStates::End);
    assert!(game.world().resource::<Session>().is_game_over());
    let store = platform.store();
    assert_eq!(store.saves, 1);
    assert_eq!(store.ads_shown, 1);

    let saved = SaveData::from_json(store.saved.as_deref().unwrap()).unwrap();
    assert_eq!(saved.best_tier, 1);
    assert_eq!(saved.best_points, 10);
    assert_eq!(saved.fish_eaten, 1);
    assert!(!game.world().resource::<EventBus>().has_fired(GAME_OVER));
}

#[test]
fn restart_from_end_clears_the_sea() {
    let (mut game, platform) = playing_game();
    add_fish(&mut game, FishSpecies::Orange, 1, HOME);
    let far = add_fish(&mut game, FishSpecies::Grey, 1, Vec2::new(100.0, 900.0));
    let bubble = {
        let world = game.world_mut();
        world.resource_scope(|world, mut areas: Mut<AreaCoordinator>| {
            let mut commands = world.commands();
            spawn_bubble(&mut commands, &mut areas, Vec2::new(300.0, 900.0), 2.0, 1.0)
        })
    };
    game.world_mut().flush();
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::End);

    game.fire(RESTART);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
    assert_eq!(platform.store().ads_prepared, 2);
    assert_eq!(fish_count(&mut game), 0);
    assert!(game.world().get_entity(far).is_err());
    assert!(game.world().get_entity(bubble).is_err());

    let session = game.world().resource::<Session>();
    assert_eq!(session.tier(), 1);
    assert_eq!(session.points(), 0);
    assert!(!session.is_game_over());
    assert_eq!(game.world().resource::<AreaCoordinator>().registered().count(), 0);

    let (id, p) = player(&mut game);
    assert_eq!(p.size, 1);
    assert_eq!(game.world().resource::<CollisionCoordinator>().registered(), &[id]);
}

#[test]
fn tenth_fish_grows_the_player_and_shrinks_the_sea() {
    let (mut game, _) = playing_game();
    for _ in 0..10 {
        add_fish(&mut game, FishSpecies::Grey, 1, HOME);
    }
    let far = add_fish(&mut game, FishSpecies::Orange, 1, Vec2::new(100.0, 900.0));
    let before = game.world().get::<CollisionBox>(far).unwrap().bounds.size();
    game.update(DT);

    let session = game.world().resource::<Session>();
    assert_eq!(session.tier(), 2);
    assert_eq!(session.fish_to_next(), 15);
    assert_eq!(session.points(), 100);
    let (_, p) = player(&mut game);
    assert_eq!(p.size, 2);

    let orange = game.world().get::<Fish>(far).unwrap();
    assert_eq!(orange.size, 1);
    let after = game.world().get::<CollisionBox>(far).unwrap().bounds.size();
    assert_eq!(after, orange.scaled_size());
    assert_ne!(before, after);
    assert_eq!(fish_count(&mut game), 1);
}

#[test]
fn pause_freezes_play() {
    let (mut game, platform) = playing_game();
    let far = add_fish(&mut game, FishSpecies::Grey, 1, Vec2::new(100.0, 900.0));

    game.set_input(&[Binding::Pause], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);

    let before = game.world().get::<MapPosition>(far).unwrap().pos;
    game.set_input(&[], None);
    for _ in 0..30 {
        game.update(DT);
    }
    assert_eq!(game.world().get::<MapPosition>(far).unwrap().pos, before);

    game.fire(CLOSE_PAUSE_MENU);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
    assert_eq!(platform.store().saves, 0);
}

#[test]
fn accept_on_pause_resumes_the_same_run() {
    let (mut game, _) = playing_game();
    add_fish(&mut game, FishSpecies::Grey, 1, HOME);
    game.update(DT);
    assert_eq!(game.world().resource::<Session>().points(), 10);

    game.set_input(&[Binding::Pause], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);
    game.set_input(&[], None);
    game.update(DT);
    game.set_input(&[Binding::Accept], None);
    game.update(DT);

    assert_eq!(game.scene(), SceneStates::Playing);
    let session = game.world().resource::<Session>();
    assert_eq!(session.points(), 10);
    assert_eq!(session.tier(), 1);
    let (_, p) = player(&mut game);
    assert_eq!(p.fish_eaten, 1);
}

#[test]
fn pause_button_touch_pauses() {
    let (mut game, _) = playing_game();
    game.set_input(&[], Some(Vec2::new(1836.0, 60.0)));
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);
}

#[test]
fn touch_pauses_and_touch_resumes() {
    let (mut game, _) = playing_game();
    let layout = ScreenLayout::new(game.world().resource::<GameConfig>());
    game.set_input(&[], Some(layout.pause_button().center()));
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);

    game.set_input(&[], None);
    game.update(DT);
    // The touch build shows Options and Play.
    let play = layout.button_row(ButtonRow::Pause, 2)[1];
    game.set_input(&[], Some(play.center()));
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
}

#[test]
fn restart_from_pause_prepares_no_ad() {
    let (mut game, platform) = playing_game();
    game.set_input(&[Binding::Pause], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);

    game.fire(RESTART);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Playing);
    assert_eq!(platform.store().ads_prepared, 1);
}

#[test]
fn pause_options_save_on_close() {
    let (mut game, platform) = playing_game();
    let presses: [&[Binding]; 4] = [
        &[Binding::Pause],
        &[Binding::Left],
        &[Binding::Accept],
        &[Binding::Right],
    ];
    for held in presses {
        game.set_input(held, None);
        game.update(DT);
        game.set_input(&[], None);
        game.update(DT);
    }
    assert_eq!(game.world().resource::<SaveData>().music_volume, 8);
    assert_eq!(platform.store().saves, 0);

    game.set_input(&[Binding::Decline], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Paused);
    assert_eq!(platform.store().saves, 1);
    let saved = SaveData::from_json(platform.store().saved.as_deref().unwrap()).unwrap();
    assert_eq!(saved.music_volume, 8);
}

#[test]
fn fish_select_returns_to_previous_screen() {
    let (mut game, platform) = quiet_game();
    game.fire(OPEN_FISH_SELECT);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::FishSelect);

    game.set_input(&[Binding::Decline], None);
    game.update(DT);
    assert_eq!(game.scene(), SceneStates::Title);
    assert_eq!(game.world().resource::<SceneState>().previous(), SceneStates::Title);
    assert_eq!(platform.store().saves, 1);
}

#[test]
fn unlock_at_game_over_raises_badge() {
    let mut save = SaveData::default();
    save.fish_eaten = 499;
    let platform = MemoryPlatform::with_save(save.to_json().unwrap());
    let mut config = GameConfig::new();
    config.max_fish = 0;
    let mut game = Game::new(config, platform.clone(), Some(3));
    assert!(!game.world().resource::<SceneState>().show_notification);

    game.fire(RESTART);
    game.update(DT);
    add_fish(&mut game, FishSpecies::Grey, 1, HOME);
    add_fish(&mut game, FishSpecies::Orange, 1, HOME + Vec2::new(1.0, 0.0));
    game.update(DT);

    assert_eq!(game.scene(), SceneStates::End);
    let save = game.world().resource::<SaveData>();
    assert_eq!(save.fish_eaten, 500);
    assert!(save.is_unlocked(FishSpecies::Green));
    assert!(game.world().resource::<SceneState>().show_notification);

    let mut list = CommandList::default();
    game.draw(&mut list);
    assert!(list.texts().any(|t| t == "New fish!"));
}

#[test]
fn unconsumed_events_expire() {
    let (mut game, _) = playing_game();
    game.fire(OPEN_FISH_SELECT);
    game.update(DT);
    assert!(game.world().resource::<EventBus>().has_fired(OPEN_FISH_SELECT));

    for _ in 0..70 {
        game.update(DT);
    }
    assert!(!game.world().resource::<EventBus>().has_fired(OPEN_FISH_SELECT));
    assert_eq!(game.scene(), SceneStates::Playing);
}

#[test]
fn decline_on_title_closes_the_game() {
    let (mut game, _) = quiet_game();
    game.set_input(&[Binding::Decline], None);
    game.update(DT);
    assert!(!game.is_running());
}

#[test]
fn player_bursts_bubbles() {
    let (mut game, _) = playing_game();
    let bubble = {
        let world = game.world_mut();
        world.resource_scope(|world, mut areas: Mut<AreaCoordinator>| {
            let mut commands = world.commands();
            spawn_bubble(&mut commands, &mut areas, HOME, 0.0, 1.0)
        })
    };
    game.world_mut().flush();
    game.update(DT);

    assert!(game.world().get_entity(bubble).is_err());
    assert_eq!(game.world().resource::<Session>().bubbles_burst(), 1);
}

#[test]
fn autopilot_session_runs_headless() {
    let platform = MemoryPlatform::new();
    let mut game = Game::new(GameConfig::new(), platform, Some(42)).with_autopilot();
    for _ in 0..600 {
        game.update(DT);
    }
    assert!(game.is_running());
    assert_ne!(game.scene(), SceneStates::Title);
    let bubbles = {
        let world = game.world_mut();
        world.query::<&Bubble>().iter(world).count()
    };
    let areas = game.world().resource::<AreaCoordinator>().registered().count();
    assert_eq!(bubbles, areas);
}
