//! Screen layout.
//!
//! Menu buttons, arrows and overlay text are authored on a 1920×1080 canvas
//! and scaled to the sea configured in [`GameConfig`], so every touch target
//! and text anchor follows `world_width` / `world_height`.
use glam::Vec2;

use super::gameconfig::GameConfig;
use crate::components::bounds::Bounds;

const REFERENCE: Vec2 = Vec2::new(1920.0, 1080.0);
const BUTTON: f32 = 256.0;
/// Distance between the left edges of two neighbouring menu buttons.
const BUTTON_STRIDE: f32 = 356.0;
const SMALL_BUTTON: f32 = 128.0;
const ARROW: Vec2 = Vec2::new(64.0, 128.0);
/// Left and right arrows of an option row, relative to the row's corner.
const OPTION_LEFT_ARROW: Vec2 = Vec2::new(-75.0, 64.0);
const OPTION_RIGHT_ARROW: Vec2 = Vec2::new(281.0, 64.0);

/// Vertical position of a screen's button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRow {
    Title,
    Pause,
    End,
}

impl ButtonRow {
    /// Top of the row on the canvas.
    pub fn y(self) -> f32 {
        match self {
            ButtonRow::Title => 750.0,
            ButtonRow::Pause => 412.0,
            ButtonRow::End => 612.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    scale: Vec2,
}

impl ScreenLayout {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scale: config.world_size() / REFERENCE,
        }
    }

    /// A point on the reference canvas, in world pixels.
    pub fn at(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) * self.scale
    }

    fn rect(&self, corner: Vec2, size: Vec2) -> Bounds {
        Bounds::from_corner(corner * self.scale, size * self.scale)
    }

    /// `count` buttons centred horizontally on `row`.
    pub fn button_row(&self, row: ButtonRow, count: usize) -> Vec<Bounds> {
        let width = count as f32 * BUTTON_STRIDE - (BUTTON_STRIDE - BUTTON);
        let left = (REFERENCE.x - width) * 0.5;
        (0..count)
            .map(|i| {
                let corner = Vec2::new(left + i as f32 * BUTTON_STRIDE, row.y());
                self.rect(corner, Vec2::splat(BUTTON))
            })
            .collect()
    }

    /// Pause button, top right.
    pub fn pause_button(&self) -> Bounds {
        self.rect(
            Vec2::new(REFERENCE.x - 148.0, 1.0),
            Vec2::splat(SMALL_BUTTON),
        )
    }

    /// Close button of the options and fish select screens, top right.
    pub fn close_button(&self) -> Bounds {
        self.rect(
            Vec2::new(REFERENCE.x - 148.0, 10.0),
            Vec2::splat(SMALL_BUTTON),
        )
    }

    /// Left and right arrows of the fish select screen.
    pub fn fish_arrows(&self) -> (Bounds, Bounds) {
        (
            self.rect(Vec2::new(REFERENCE.x / 3.0, 476.0), ARROW),
            self.rect(Vec2::new(REFERENCE.x * 2.0 / 3.0, 476.0), ARROW),
        )
    }

    /// Corner of option row `index` on the options screen.
    fn option_corner(&self, index: usize) -> Vec2 {
        Vec2::new((REFERENCE.x - BUTTON) * 0.5, 234.0 + index as f32 * 356.0)
    }

    pub fn option_row(&self, index: usize) -> Bounds {
        self.rect(self.option_corner(index), Vec2::splat(BUTTON))
    }

    /// Left and right arrows of option row `index`.
    pub fn option_arrows(&self, index: usize) -> (Bounds, Bounds) {
        let corner = self.option_corner(index);
        (
            self.rect(corner + OPTION_LEFT_ARROW, ARROW),
            self.rect(corner + OPTION_RIGHT_ARROW, ARROW),
        )
    }
}
