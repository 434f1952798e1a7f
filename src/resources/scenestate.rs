//! Scene state machine.
//!
//! The main scene is always in one of five [`SceneStates`]. Once per frame
//! [`SceneState::advance`] polls the [`EventBus`] for the names that matter in
//! the current state and returns the resulting [`Transition`], if any. The
//! side effects of a transition (resetting a run, writing the save, ...) are
//! applied by the observer in [`crate::events::scene`].
//!
//! Within one state the names are polled in a fixed order and every match is
//! consumed; when more than one matches in the same frame the later one wins.

use bevy_ecs::prelude::Resource;

use super::eventbus::{
    CLOSE_FISH_SELECT, CLOSE_PAUSE_MENU, EventBus, GAME_OVER, OPEN_FISH_SELECT, RESTART,
};

/// Discrete screens of the main scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneStates {
    #[default]
    Title,
    FishSelect,
    Playing,
    Paused,
    End,
}

/// What caused a transition; decides which side effects run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCause {
    /// First run started from the title screen.
    Started,
    OpenedFishSelect,
    ClosedFishSelect,
    GameOver,
    Paused,
    Resumed,
    /// Fresh run requested from the pause or end screen.
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SceneStates,
    pub to: SceneStates,
    pub cause: TransitionCause,
}

/// Authoritative current screen.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SceneState {
    current: SceneStates,
    /// Screen to return to when the fish select screen closes.
    previous: SceneStates,
    /// Whether the title and end screens show the new-fish badge.
    pub show_notification: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        SceneState {
            current: SceneStates::Title,
            previous: SceneStates::Title,
            show_notification: false,
        }
    }

    pub fn get(&self) -> SceneStates {
        self.current
    }

    pub fn previous(&self) -> SceneStates {
        self.previous
    }

    /// Jump straight to `state` without any transition side effects.
    pub fn set(&mut self, state: SceneStates) {
        self.current = state;
    }

    /// Poll the bus for the current screen and move to the next one.
    ///
    /// `pause_requested` is the pause binding or a touch on the pause button;
    /// it only matters while playing.
    pub fn advance(&mut self, bus: &mut EventBus, pause_requested: bool) -> Option<Transition> {
        use SceneStates::*;
        use TransitionCause as Cause;

        let from = self.current;
        let mut next: Option<(SceneStates, TransitionCause)> = None;
        match from {
            Title => {
                if bus.poll_and_consume(OPEN_FISH_SELECT) {
                    next = Some((FishSelect, Cause::OpenedFishSelect));
                }
                if bus.poll_and_consume(RESTART) {
                    next = Some((Playing, Cause::Started));
                }
            }
            FishSelect => {
                if bus.poll_and_consume(CLOSE_FISH_SELECT) {
                    next = Some((self.previous, Cause::ClosedFishSelect));
                }
            }
            Playing => {
                // Game over outranks a pause pressed on the same frame.
                if bus.poll_and_consume(GAME_OVER) {
                    next = Some((End, Cause::GameOver));
                } else if pause_requested {
                    next = Some((Paused, Cause::Paused));
                }
            }
            Paused => {
                if bus.poll_and_consume(CLOSE_PAUSE_MENU) {
                    next = Some((Playing, Cause::Resumed));
                }
                if bus.poll_and_consume(RESTART) {
                    next = Some((Playing, Cause::Restarted));
                }
            }
            End => {
                if bus.poll_and_consume(OPEN_FISH_SELECT) {
                    next = Some((FishSelect, Cause::OpenedFishSelect));
                }
                if bus.poll_and_consume(RESTART) {
                    next = Some((Playing, Cause::Restarted));
                }
            }
        }

        let (to, cause) = next?;
        if to == FishSelect {
            self.previous = from;
        }
        self.current = to;
        Some(Transition { from, to, cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_and_advance(scene: &mut SceneState, names: &[&str]) -> Option<Transition> {
        let mut bus = EventBus::new();
        for name in names {
            bus.fire(*name);
        }
        scene.advance(&mut bus, false)
    }

    #[test]
    fn starts_on_title() {
        assert_eq!(SceneState::new().get(), SceneStates::Title);
    }

    #[test]
    fn title_restart_starts_playing() {
        let mut scene = SceneState::new();
        let t = fire_and_advance(&mut scene, &[RESTART]);
        assert_eq!(t.map(|t| t.cause), Some(TransitionCause::Started));
        assert_eq!(scene.get(), SceneStates::Playing);
    }

    #[test]
    fn later_event_wins_on_title() {
        let mut scene = SceneState::new();
        fire_and_advance(&mut scene, &[OPEN_FISH_SELECT, RESTART]);
        assert_eq!(scene.get(), SceneStates::Playing);
    }

    #[test]
    fn fish_select_returns_to_previous_screen() {
        let mut scene = SceneState::new();
        scene.set(SceneStates::End);
        fire_and_advance(&mut scene, &[OPEN_FISH_SELECT]);
        assert_eq!(scene.get(), SceneStates::FishSelect);
        assert_eq!(scene.previous(), SceneStates::End);
        let t = fire_and_advance(&mut scene, &[CLOSE_FISH_SELECT]);
        assert_eq!(
            t,
            Some(Transition {
                from: SceneStates::FishSelect,
                to: SceneStates::End,
                cause: TransitionCause::ClosedFishSelect,
            })
        );
    }

    #[test]
    fn pause_and_resume() {
        let mut scene = SceneState::new();
        scene.set(SceneStates::Playing);
        let mut bus = EventBus::new();
        assert_eq!(scene.advance(&mut bus, false), None);
        scene.advance(&mut bus, true);
        assert_eq!(scene.get(), SceneStates::Paused);
        // Pause input is ignored once paused.
        assert_eq!(scene.advance(&mut bus, true), None);
        bus.fire(CLOSE_PAUSE_MENU);
        scene.advance(&mut bus, false);
        assert_eq!(scene.get(), SceneStates::Playing);
    }

    #[test]
    fn game_over_beats_pause() {
        let mut scene = SceneState::new();
        scene.set(SceneStates::Playing);
        let mut bus = EventBus::new();
        bus.fire(GAME_OVER);
        let t = scene.advance(&mut bus, true);
        assert_eq!(t.map(|t| t.to), Some(SceneStates::End));
    }

    #[test]
    fn events_for_other_screens_are_left_alone() {
        let mut scene = SceneState::new();
        let mut bus = EventBus::new();
        bus.fire(CLOSE_PAUSE_MENU);
        assert_eq!(scene.advance(&mut bus, false), None);
        assert!(bus.has_fired(CLOSE_PAUSE_MENU));
    }

    #[test]
    fn paused_restart_restarts() {
        let mut scene = SceneState::new();
        scene.set(SceneStates::Paused);
        let t = fire_and_advance(&mut scene, &[CLOSE_PAUSE_MENU, RESTART]);
        assert_eq!(t.map(|t| t.cause), Some(TransitionCause::Restarted));
    }
}
