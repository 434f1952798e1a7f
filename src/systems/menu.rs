//! Menu screen systems.
//!
//! Screens never change the scene themselves. They translate input into
//! named events on the [`EventBus`] and leave the transition to
//! [`scene_transition_system`](super::scene::scene_transition_system):
//!
//! - [`screen_input_system`] – button rows of the title, pause and end
//!   screens, and their options sub-screen
//! - [`fish_select_input_system`] – browse and pick the player species
//!
//! Every button reacts to a touch as well as to the keyboard bindings.
use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::eventbus::{
    CLOSE_FISH_SELECT, CLOSE_GAME, CLOSE_PAUSE_MENU, EventBus, OPEN_FISH_SELECT, RESTART,
};
use crate::resources::fishselect::FishSelectMenu;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{Binding, InputState};
use crate::resources::layout::{ButtonRow, ScreenLayout};
use crate::resources::platform::PlatformServices;
use crate::resources::savedata::SaveData;
use crate::resources::scenestate::{SceneState, SceneStates};
use crate::resources::screenmenu::{MenuButton, OptionRow, ScreenMenu};

/// Drive the button row of the title, pause or end screen.
///
/// Left/Right move the highlight and Accept activates it; touching a button
/// highlights and activates it at once. Pause or Decline resume from the
/// pause screen. Select and Decline on the title screen are shortcuts to the
/// fish select screen and to quitting.
pub fn screen_input_system(
    input: Res<InputState>,
    scene: Res<SceneState>,
    config: Res<GameConfig>,
    mut menu: ResMut<ScreenMenu>,
    mut bus: ResMut<EventBus>,
    mut save: ResMut<SaveData>,
    mut platform: ResMut<PlatformServices>,
) {
    let screen = scene.get();
    menu.show(screen);
    let row = match screen {
        SceneStates::Title => ButtonRow::Title,
        SceneStates::Paused => ButtonRow::Pause,
        SceneStates::End => ButtonRow::End,
        SceneStates::Playing | SceneStates::FishSelect => return,
    };
    let layout = ScreenLayout::new(&config);

    if menu.showing_options() {
        options_input(&input, &layout, &mut menu, &mut save, &mut platform);
        return;
    }

    let mut chosen = None;
    for (index, button) in layout
        .button_row(row, menu.buttons().len())
        .iter()
        .enumerate()
    {
        if input.touched(button) {
            menu.set_cursor(index);
            chosen = menu.highlighted();
        }
    }
    if input.pressed(Binding::Left) {
        menu.move_left();
    }
    if input.pressed(Binding::Right) {
        menu.move_right();
    }
    if input.pressed(Binding::Accept) {
        chosen = menu.highlighted();
    }

    match screen {
        SceneStates::Title => {
            if input.pressed(Binding::Select) {
                bus.fire(OPEN_FISH_SELECT);
            }
            if input.pressed(Binding::Decline) {
                bus.fire(CLOSE_GAME);
            }
        }
        SceneStates::Paused => {
            if input.pressed(Binding::Pause) || input.pressed(Binding::Decline) {
                bus.fire(CLOSE_PAUSE_MENU);
            }
        }
        SceneStates::End => {
            if input.pressed(Binding::Select) {
                bus.fire(OPEN_FISH_SELECT);
            }
        }
        SceneStates::Playing | SceneStates::FishSelect => {}
    }

    match chosen {
        Some(MenuButton::Options) => menu.open_options(),
        Some(MenuButton::FishMenu) => bus.fire(OPEN_FISH_SELECT),
        Some(MenuButton::Play) | Some(MenuButton::Restart) => bus.fire(RESTART),
        Some(MenuButton::Resume) => bus.fire(CLOSE_PAUSE_MENU),
        Some(MenuButton::Quit) => bus.fire(CLOSE_GAME),
        None => {}
    }
}

/// Music and sound rows. Up/Down pick the row, Left/Right or the row's
/// arrows step its volume; closing writes the save.
fn options_input(
    input: &InputState,
    layout: &ScreenLayout,
    menu: &mut ScreenMenu,
    save: &mut SaveData,
    platform: &mut PlatformServices,
) {
    if input.pressed(Binding::Up) {
        menu.option_up();
    }
    if input.pressed(Binding::Down) {
        menu.option_down();
    }

    let mut steps: Vec<(OptionRow, i32)> = Vec::new();
    if input.pressed(Binding::Left) {
        steps.push((menu.option(), -1));
    }
    if input.pressed(Binding::Right) {
        steps.push((menu.option(), 1));
    }
    for (index, row) in OptionRow::ALL.into_iter().enumerate() {
        let (left, right) = layout.option_arrows(index);
        if input.touched(&left) {
            steps.push((row, -1));
        }
        if input.touched(&right) {
            steps.push((row, 1));
        }
    }
    for (row, step) in steps {
        match row {
            OptionRow::Music => save.step_music_volume(step),
            OptionRow::Sound => save.step_sound_volume(step),
        }
    }

    if input.pressed(Binding::Pause)
        || input.pressed(Binding::Decline)
        || input.touched(&layout.close_button())
    {
        menu.close_options();
        if let Err(e) = save.save(platform.0.as_mut()) {
            warn!("{}", e);
        }
    }
}

/// Browse species with Left/Right or the arrows; Accept, Decline, Pause or
/// the close button commits the choice and closes the screen.
pub fn fish_select_input_system(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut menu: ResMut<FishSelectMenu>,
    mut save: ResMut<SaveData>,
    mut bus: ResMut<EventBus>,
) {
    let layout = ScreenLayout::new(&config);
    let (left, right) = layout.fish_arrows();
    if input.pressed(Binding::Left) || input.touched(&left) {
        menu.select_left(&mut save);
    }
    if input.pressed(Binding::Right) || input.touched(&right) {
        menu.select_right(&mut save);
    }
    if input.pressed(Binding::Accept)
        || input.pressed(Binding::Decline)
        || input.pressed(Binding::Pause)
        || input.touched(&layout.close_button())
    {
        menu.close(&mut save);
        bus.fire(CLOSE_FISH_SELECT);
    }
}
