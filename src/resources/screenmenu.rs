//! Button rows of the title, pause and end screens.
//!
//! Each screen shows a row of buttons with one highlighted. Left/Right move
//! the highlight, Accept or a touch activates a button. The Options button
//! opens a sub-screen with the music and sound rows; it belongs to the
//! screen it was opened from and closes when that screen is left.
//!
//! Only PC builds get a Quit button.
use bevy_ecs::prelude::Resource;

use super::scenestate::SceneStates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Options,
    FishMenu,
    /// Start a run from the title screen.
    Play,
    /// Leave the pause screen.
    Resume,
    Restart,
    Quit,
}

impl MenuButton {
    pub fn label(self) -> &'static str {
        match self {
            MenuButton::Options => "Options",
            MenuButton::FishMenu => "Fish",
            MenuButton::Play | MenuButton::Resume => "Play",
            MenuButton::Restart => "Restart",
            MenuButton::Quit => "Quit",
        }
    }
}

const TITLE_PC: &[MenuButton] = &[
    MenuButton::Options,
    MenuButton::FishMenu,
    MenuButton::Play,
    MenuButton::Quit,
];
const TITLE: &[MenuButton] = &[MenuButton::Options, MenuButton::FishMenu, MenuButton::Play];
const PAUSE_PC: &[MenuButton] = &[MenuButton::Options, MenuButton::Resume, MenuButton::Quit];
const PAUSE: &[MenuButton] = &[MenuButton::Options, MenuButton::Resume];
const END_PC: &[MenuButton] = &[
    MenuButton::Options,
    MenuButton::FishMenu,
    MenuButton::Restart,
    MenuButton::Quit,
];
const END: &[MenuButton] = &[MenuButton::Options, MenuButton::FishMenu, MenuButton::Restart];

/// Rows of the options sub-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow {
    Music,
    Sound,
}

impl OptionRow {
    pub const ALL: [OptionRow; 2] = [OptionRow::Music, OptionRow::Sound];

    pub fn label(self) -> &'static str {
        match self {
            OptionRow::Music => "Music",
            OptionRow::Sound => "Sound",
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ScreenMenu {
    is_pc: bool,
    screen: SceneStates,
    cursor: usize,
    showing_options: bool,
    option: usize,
}

impl ScreenMenu {
    pub fn new(is_pc: bool) -> Self {
        Self {
            is_pc,
            screen: SceneStates::Title,
            cursor: default_cursor(SceneStates::Title),
            showing_options: false,
            option: 0,
        }
    }

    /// Follow the current screen. Entering a screen puts the highlight back
    /// on its Play button and closes the options.
    pub fn show(&mut self, screen: SceneStates) {
        if screen != self.screen {
            self.screen = screen;
            self.cursor = default_cursor(screen);
            self.showing_options = false;
            self.option = 0;
        }
    }

    pub fn screen(&self) -> SceneStates {
        self.screen
    }

    /// Buttons of the current screen, left to right.
    pub fn buttons(&self) -> &'static [MenuButton] {
        match (self.screen, self.is_pc) {
            (SceneStates::Title, true) => TITLE_PC,
            (SceneStates::Title, false) => TITLE,
            (SceneStates::Paused, true) => PAUSE_PC,
            (SceneStates::Paused, false) => PAUSE,
            (SceneStates::End, true) => END_PC,
            (SceneStates::End, false) => END,
            (SceneStates::Playing | SceneStates::FishSelect, _) => &[],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<MenuButton> {
        self.buttons().get(self.cursor).copied()
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.buttons().len() {
            self.cursor = index;
        }
    }

    pub fn move_left(&mut self) {
        let count = self.buttons().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn move_right(&mut self) {
        let count = self.buttons().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn showing_options(&self) -> bool {
        self.showing_options
    }

    pub fn open_options(&mut self) {
        self.showing_options = true;
        self.option = 0;
    }

    pub fn close_options(&mut self) {
        self.showing_options = false;
    }

    pub fn option(&self) -> OptionRow {
        OptionRow::ALL[self.option]
    }

    pub fn option_up(&mut self) {
        let count = OptionRow::ALL.len();
        self.option = (self.option + count - 1) % count;
    }

    pub fn option_down(&mut self) {
        self.option = (self.option + 1) % OptionRow::ALL.len();
    }
}

/// Every row has its Play, Resume or Restart button at the same index.
fn default_cursor(screen: SceneStates) -> usize {
    match screen {
        SceneStates::Paused => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_row_starts_on_play() {
        let mut menu = ScreenMenu::new(true);
        menu.show(SceneStates::Paused);
        assert_eq!(menu.highlighted(), Some(MenuButton::Resume));
        menu.move_right();
        assert_eq!(menu.highlighted(), Some(MenuButton::Quit));
        menu.move_right();
        assert_eq!(menu.highlighted(), Some(MenuButton::Options));
        menu.move_left();
        assert_eq!(menu.highlighted(), Some(MenuButton::Quit));
    }

    #[test]
    fn quit_only_on_pc() {
        let mut menu = ScreenMenu::new(false);
        menu.show(SceneStates::End);
        assert!(!menu.buttons().contains(&MenuButton::Quit));
        assert_eq!(menu.highlighted(), Some(MenuButton::Restart));
    }

    #[test]
    fn leaving_a_screen_closes_options() {
        let mut menu = ScreenMenu::new(true);
        menu.show(SceneStates::Paused);
        menu.move_left();
        menu.open_options();
        menu.option_down();
        assert_eq!(menu.option(), OptionRow::Sound);

        menu.show(SceneStates::Paused);
        assert!(menu.showing_options());

        menu.show(SceneStates::Playing);
        menu.show(SceneStates::Paused);
        assert!(!menu.showing_options());
        assert_eq!(menu.highlighted(), Some(MenuButton::Resume));
    }
}
