//! Fish select screen state.
//!
//! Browses all seven species in a loop. Every species the cursor lands on
//! counts as seen and loses its notification. Closing keeps the species
//! under the cursor only if it is unlocked.
use bevy_ecs::prelude::Resource;

use super::savedata::SaveData;
use crate::components::fish::FishSpecies;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FishSelectMenu {
    index: usize,
}

impl FishSelectMenu {
    pub fn current(&self) -> FishSpecies {
        FishSpecies::ALL[self.index]
    }

    /// Put the cursor on the species currently in use.
    pub fn open(&mut self, save: &mut SaveData) {
        self.index = save.current_fish.index();
        save.mark_seen(self.current());
    }

    pub fn select_left(&mut self, save: &mut SaveData) -> FishSpecies {
        let count = FishSpecies::ALL.len();
        self.index = (self.index + count - 1) % count;
        save.mark_seen(self.current());
        self.current()
    }

    pub fn select_right(&mut self, save: &mut SaveData) -> FishSpecies {
        self.index = (self.index + 1) % FishSpecies::ALL.len();
        save.mark_seen(self.current());
        self.current()
    }

    /// Commit the choice. Returns whether the selection changed to the
    /// species under the cursor.
    pub fn close(&self, save: &mut SaveData) -> bool {
        save.select_fish(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut save = SaveData::default();
        let mut menu = FishSelectMenu::default();
        menu.open(&mut save);
        assert_eq!(menu.select_left(&mut save), FishSpecies::Shark);
        assert_eq!(menu.select_right(&mut save), FishSpecies::Grey);
    }

    #[test]
    fn viewing_clears_notification() {
        let mut save = SaveData::default();
        save.unlock_earned(4, 0);
        let mut menu = FishSelectMenu::default();
        menu.open(&mut save);
        assert!(save.any_notifications());
        menu.select_right(&mut save);
        assert!(!save.any_notifications());
    }

    #[test]
    fn closing_on_locked_fish_keeps_selection() {
        let mut save = SaveData::default();
        save.unlock_earned(4, 0);
        let mut menu = FishSelectMenu::default();
        menu.open(&mut save);
        menu.select_right(&mut save);
        menu.select_right(&mut save);
        assert!(!menu.close(&mut save));
        assert_eq!(save.current_fish, FishSpecies::Grey);
        menu.select_left(&mut save);
        assert!(menu.close(&mut save));
        assert_eq!(save.current_fish, FishSpecies::Orange);
    }
}
