//! Scene systems.
//!
//! - [`scene_transition_system`] drives the [`SceneState`] machine once per
//!   frame and triggers a [`SceneChangedEvent`] on every transition.
//! - [`scene_is_playing`] / [`scene_is_fish_select`] are run conditions for
//!   the per-screen systems.
use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangedEvent;
use crate::resources::eventbus::EventBus;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{Binding, InputState};
use crate::resources::layout::ScreenLayout;
use crate::resources::scenestate::{SceneState, SceneStates};

/// Pause binding pressed, or the pointer went down on the pause button.
pub fn pause_requested(input: &InputState, layout: &ScreenLayout) -> bool {
    input.pressed(Binding::Pause) || input.touched(&layout.pause_button())
}

pub fn scene_transition_system(
    mut commands: Commands,
    mut scene: ResMut<SceneState>,
    mut bus: ResMut<EventBus>,
    input: Res<InputState>,
    config: Res<GameConfig>,
) {
    let pause = pause_requested(&input, &ScreenLayout::new(&config));
    if let Some(transition) = scene.advance(&mut bus, pause) {
        commands.trigger(SceneChangedEvent(transition));
    }
}

pub fn scene_is_playing(scene: Res<SceneState>) -> bool {
    matches!(scene.get(), SceneStates::Playing)
}

pub fn scene_is_fish_select(scene: Res<SceneState>) -> bool {
    matches!(scene.get(), SceneStates::FishSelect)
}
