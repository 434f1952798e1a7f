//! Draw pass.
//!
//! The simulation never talks to a graphics API. [`render_pass`] walks the
//! world once per frame and hands [`DrawCommand`]s to a [`RenderSurface`]
//! supplied by the host: a window backend, or a [`CommandList`] when running
//! headless and in tests.
//!
//! Sprites are culled against the visible sea, sorted by [`ZIndex`] (bubbles,
//! then fish, then the player) and followed by the HUD and the overlay of the
//! current screen. Overlay text and buttons are placed by [`ScreenLayout`],
//! the same rectangles the menu systems test touches against.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::bounds::Bounds;
use crate::components::bubble::BUBBLE_SIZE;
use crate::components::fish::{Fish, FishSpecies};
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::zindex::ZIndex;
use crate::resources::fishselect::FishSelectMenu;
use crate::resources::gameconfig::GameConfig;
use crate::resources::layout::{ButtonRow, ScreenLayout};
use crate::resources::savedata::SaveData;
use crate::resources::scenestate::{SceneState, SceneStates};
use crate::resources::screenmenu::{OptionRow, ScreenMenu};
use crate::resources::session::Session;

const WHITE: [u8; 4] = [255, 255, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Fish(FishSpecies),
    Bubble,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        /// Top-left corner in world pixels.
        position: Vec2,
        /// Size on screen after scaling.
        size: Vec2,
        /// Draw scale applied to the sprite frame.
        scale: f32,
        /// Radians.
        rotation: f32,
        tint: [u8; 4],
        /// Mirror horizontally; fish face right unflipped.
        flip: bool,
        z: ZIndex,
    },
    Text {
        text: String,
        position: Vec2,
    },
    /// A touch target.
    Button {
        label: String,
        bounds: Bounds,
        highlighted: bool,
    },
}

/// Whatever the host draws on.
pub trait RenderSurface {
    fn draw(&mut self, command: DrawCommand);
}

/// Surface that only records what was drawn.
#[derive(Debug, Default, Clone)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl RenderSurface for CommandList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl CommandList {
    pub fn sprites(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } | DrawCommand::Button { .. } => None,
        })
    }

    /// Labels of the buttons drawn, with their highlight.
    pub fn buttons(&self) -> impl Iterator<Item = (&str, bool)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Button {
                label, highlighted, ..
            } => Some((label.as_str(), *highlighted)),
            DrawCommand::Sprite { .. } | DrawCommand::Text { .. } => None,
        })
    }
}

pub fn render_pass(world: &mut World, surface: &mut dyn RenderSurface) {
    let (view, layout) = {
        let config = world.resource::<GameConfig>();
        (
            Bounds::from_corner(Vec2::ZERO, config.world_size()),
            ScreenLayout::new(config),
        )
    };

    let mut to_draw: Vec<DrawCommand> = {
        let mut q = world.query::<(
            &EntityKind,
            &MapPosition,
            &ZIndex,
            Option<&Fish>,
            Option<&Player>,
        )>();
        q.iter(world)
            .filter_map(|(kind, p, z, fish, player)| {
                let (sprite, position, size, scale, flip) = match kind {
                    EntityKind::Bubble => (
                        SpriteId::Bubble,
                        p.pos,
                        Vec2::splat(BUBBLE_SIZE),
                        1.0,
                        false,
                    ),
                    EntityKind::Fish => {
                        let f = fish?;
                        let size = f.scaled_size();
                        let corner = p.pos - size * 0.5;
                        (SpriteId::Fish(f.species), corner, size, f.draw_scale, f.flip)
                    }
                    EntityKind::Player => {
                        let pl = player?;
                        let size = pl.scaled_size();
                        let corner = p.pos - size * 0.5;
                        (SpriteId::Fish(pl.species), corner, size, pl.draw_scale, pl.flip)
                    }
                };
                // Cull against the visible sea
                if !view.intersects(&Bounds::from_corner(position, size)) {
                    return None;
                }
                Some(DrawCommand::Sprite {
                    sprite,
                    position,
                    size,
                    scale,
                    rotation: 0.0,
                    tint: WHITE,
                    flip,
                    z: *z,
                })
            })
            .collect()
    };

    to_draw.sort_by_key(|c| match c {
        DrawCommand::Sprite { z, .. } => *z,
        DrawCommand::Text { .. } | DrawCommand::Button { .. } => ZIndex(i32::MAX),
    });
    for command in to_draw {
        surface.draw(command);
    }

    draw_hud(world, &layout, surface);
    draw_overlay(world, &layout, surface);
}

/// Text anchored at `(x, y)` on the layout canvas.
fn text(surface: &mut dyn RenderSurface, layout: &ScreenLayout, text: String, x: f32, y: f32) {
    surface.draw(DrawCommand::Text {
        text,
        position: layout.at(x, y),
    });
}

fn button(surface: &mut dyn RenderSurface, label: &str, bounds: Bounds, highlighted: bool) {
    surface.draw(DrawCommand::Button {
        label: label.to_string(),
        bounds,
        highlighted,
    });
}

fn draw_hud(world: &World, layout: &ScreenLayout, surface: &mut dyn RenderSurface) {
    let session = world.resource::<Session>();
    text(surface, layout, format!("Points: {}", session.points()), 20.0, 20.0);
    text(surface, layout, format!("Tier: {}", session.tier()), 20.0, 60.0);
    text(
        surface,
        layout,
        format!("Next: {}", session.fish_to_next().max(0)),
        20.0,
        100.0,
    );
    if session.double_score_active() {
        text(
            surface,
            layout,
            format!("Double score {:.1}s", session.double_score_remaining()),
            800.0,
            20.0,
        );
    }
}

fn draw_overlay(world: &World, layout: &ScreenLayout, surface: &mut dyn RenderSurface) {
    let scene = world.resource::<SceneState>();
    let save = world.resource::<SaveData>();
    let session = world.resource::<Session>();
    // The menu catches up with the scene on the next input pass.
    let mut menu = world.resource::<ScreenMenu>().clone();
    menu.show(scene.get());

    let row = match scene.get() {
        SceneStates::Title => ButtonRow::Title,
        SceneStates::Paused => ButtonRow::Pause,
        SceneStates::End => ButtonRow::End,
        SceneStates::Playing => {
            button(surface, "Pause", layout.pause_button(), false);
            return;
        }
        SceneStates::FishSelect => {
            let species = world.resource::<FishSelectMenu>().current();
            let label = if save.is_unlocked(species) {
                species.name().to_string()
            } else {
                format!("{} (locked)", species.name())
            };
            text(surface, layout, label, 860.0, 480.0);
            let (left, right) = layout.fish_arrows();
            button(surface, "<", left, false);
            button(surface, ">", right, false);
            button(surface, "Close", layout.close_button(), false);
            return;
        }
    };

    if menu.showing_options() {
        for (index, option) in OptionRow::ALL.into_iter().enumerate() {
            let volume = match option {
                OptionRow::Music => save.music_volume,
                OptionRow::Sound => save.sound_volume,
            };
            let label = format!("{}: {}", option.label(), volume);
            button(surface, &label, layout.option_row(index), menu.option() == option);
            let (left, right) = layout.option_arrows(index);
            button(surface, "<", left, false);
            button(surface, ">", right, false);
        }
        button(surface, "Close", layout.close_button(), false);
        return;
    }

    match scene.get() {
        SceneStates::Title => {
            text(surface, layout, "Bigger Fish".to_string(), 800.0, 400.0);
        }
        SceneStates::Paused => {
            text(surface, layout, "Paused".to_string(), 860.0, 300.0);
        }
        SceneStates::End => {
            text(surface, layout, "Game Over".to_string(), 840.0, 150.0);
            text(
                surface,
                layout,
                format!("Tier {} / {} points", session.tier(), session.points()),
                300.0,
                300.0,
            );
            text(
                surface,
                layout,
                format!("Best: tier {} / {} points", save.best_tier, save.best_points),
                1000.0,
                300.0,
            );
        }
        SceneStates::Playing | SceneStates::FishSelect => {}
    }
    if scene.show_notification && scene.get() != SceneStates::Paused {
        text(surface, layout, "New fish!".to_string(), 1000.0, row.y() - 12.0);
    }
    let rects = layout.button_row(row, menu.buttons().len());
    for (index, (b, rect)) in menu.buttons().iter().zip(rects).enumerate() {
        button(surface, b.label(), rect, index == menu.cursor());
    }
}
