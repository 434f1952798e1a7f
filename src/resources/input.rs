//! Per-frame input resource.
//!
//! The host (window loop, headless autopilot, test) reports which
//! [`Binding`]s are held and where the pointer is once per frame through
//! [`InputState::update`]; the resource derives press and release edges.
//! Gameplay systems only ever read it.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::bounds::Bounds;

/// Logical actions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Up,
    Down,
    Left,
    Right,
    /// Confirm a menu choice.
    Accept,
    /// Back out of a menu.
    Decline,
    Pause,
    /// Open the fish select screen from the title or end screen.
    Select,
}

impl Binding {
    pub const ALL: [Binding; 8] = [
        Binding::Up,
        Binding::Down,
        Binding::Left,
        Binding::Right,
        Binding::Accept,
        Binding::Decline,
        Binding::Pause,
        Binding::Select,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Boolean button state with edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the button is currently held this frame.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed this frame's held flag.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    bindings: [BoolState; Binding::ALL.len()],
    /// Mouse or touch, whichever the platform has.
    pub pointer: BoolState,
    pub pointer_position: Vec2,
}

impl InputState {
    /// Record the bindings held this frame and the pointer, if it is down.
    pub fn update(&mut self, held: &[Binding], pointer: Option<Vec2>) {
        for binding in Binding::ALL {
            self.bindings[binding.index()].update(held.contains(&binding));
        }
        self.pointer.update(pointer.is_some());
        if let Some(position) = pointer {
            self.pointer_position = position;
        }
    }

    pub fn state(&self, binding: Binding) -> BoolState {
        self.bindings[binding.index()]
    }

    pub fn held(&self, binding: Binding) -> bool {
        self.state(binding).active
    }

    pub fn pressed(&self, binding: Binding) -> bool {
        self.state(binding).just_pressed
    }

    /// Pointer went down this frame at `pointer_position`.
    pub fn pointer_pressed(&self) -> bool {
        self.pointer.just_pressed
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer.active
    }

    /// Pointer went down this frame inside `target`.
    pub fn touched(&self, target: &Bounds) -> bool {
        self.pointer_pressed() && target.contains(self.pointer_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_held_flags() {
        let mut input = InputState::default();
        input.update(&[Binding::Pause], None);
        assert!(input.pressed(Binding::Pause));
        assert!(input.held(Binding::Pause));

        input.update(&[Binding::Pause], None);
        assert!(!input.pressed(Binding::Pause));
        assert!(input.held(Binding::Pause));

        input.update(&[], None);
        assert!(input.state(Binding::Pause).just_released);
        assert!(!input.held(Binding::Pause));
    }

    #[test]
    fn pointer_keeps_last_position() {
        let mut input = InputState::default();
        input.update(&[], Some(Vec2::new(10.0, 20.0)));
        assert!(input.pointer_pressed());
        input.update(&[], None);
        assert!(!input.pointer_held());
        assert_eq!(input.pointer_position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn touch_needs_a_fresh_press_inside() {
        let button = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let mut input = InputState::default();
        input.update(&[], Some(Vec2::new(25.0, 25.0)));
        assert!(input.touched(&button));
        input.update(&[], Some(Vec2::new(25.0, 25.0)));
        assert!(!input.touched(&button));
        input.update(&[], None);
        input.update(&[], Some(Vec2::new(80.0, 25.0)));
        assert!(!input.touched(&button));
    }
}
