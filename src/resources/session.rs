//! Per-run score and progression.
//!
//! [`Session`] holds everything a restart wipes: the current tier, points,
//! fish left before the next tier, the double-score meter and the count of
//! oversized fish still swimming. The rules it applies come from
//! [`ScoreRules`] and a [`TierTable`], both fixed for the lifetime of the
//! session.
use bevy_ecs::prelude::Resource;
use log::info;

use super::tiers::TierTable;

/// Tunable scoring numbers, usually taken from the
/// [`GameConfig`](super::gameconfig::GameConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRules {
    pub points_per_fish: u32,
    /// Extra points per fish while double score is active.
    pub double_score_bonus: u32,
    /// Bubbles to burst to switch double score on.
    pub bubbles_for_double: u32,
    pub double_score_seconds: f32,
    /// Seconds added for each bubble burst while double score is on.
    pub double_score_extension: f32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            points_per_fish: 10,
            double_score_bonus: 40,
            bubbles_for_double: 10,
            double_score_seconds: 10.0,
            double_score_extension: 0.5,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    rules: ScoreRules,
    tiers: TierTable,
    tier: i32,
    points: u32,
    fish_to_next: i64,
    double_score_remaining: f32,
    bubbles_burst: u32,
    /// Oversized fish alive. Each eaten fish wears it down by a quarter.
    big_fish_count: f32,
    game_over: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScoreRules::default(), TierTable::default())
    }
}

impl Session {
    pub fn new(rules: ScoreRules, tiers: TierTable) -> Self {
        let fish_to_next = tiers.fish_needed(1) as i64;
        Self {
            rules,
            tiers,
            tier: 1,
            points: 0,
            fish_to_next,
            double_score_remaining: 0.0,
            bubbles_burst: 0,
            big_fish_count: 0.0,
            game_over: false,
        }
    }

    /// Start a fresh run with the same rules. The oversized counter is not
    /// part of a run and carries over.
    pub fn reset(&mut self) {
        let big_fish_count = self.big_fish_count;
        *self = Self::new(self.rules, self.tiers.clone());
        self.big_fish_count = big_fish_count;
    }

    pub fn tier(&self) -> i32 {
        self.tier
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn fish_to_next(&self) -> i64 {
        self.fish_to_next
    }

    pub fn bubbles_burst(&self) -> u32 {
        self.bubbles_burst
    }

    pub fn double_score_remaining(&self) -> f32 {
        self.double_score_remaining
    }

    pub fn double_score_active(&self) -> bool {
        self.double_score_remaining > 0.0
    }

    pub fn big_fish_count(&self) -> f32 {
        self.big_fish_count
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Credit one fish eaten by the player.
    ///
    /// Returns `true` when the player grew into a new tier; the caller then
    /// rescales the sea.
    pub fn on_fish_eaten(&mut self) -> bool {
        self.fish_to_next -= 1;
        self.points += self.rules.points_per_fish;
        if self.double_score_active() {
            self.points += self.rules.double_score_bonus;
        }

        if self.fish_to_next <= 0 {
            self.tier += 1;
            self.fish_to_next = self.tiers.fish_needed(self.tier) as i64;
            info!(
                "tier up: {} ({} fish to next, {} points)",
                self.tier, self.fish_to_next, self.points
            );
            return true;
        }
        false
    }

    /// Feed the double-score meter with one burst bubble.
    pub fn on_bubble_burst(&mut self) {
        if self.double_score_active() {
            self.double_score_remaining += self.rules.double_score_extension;
            return;
        }
        self.bubbles_burst += 1;
        if self.bubbles_burst >= self.rules.bubbles_for_double {
            self.bubbles_burst = 0;
            self.double_score_remaining = self.rules.double_score_seconds;
            info!("double score for {}s", self.double_score_remaining);
        }
    }

    /// Run the double-score timer down by `delta` seconds.
    pub fn tick_double_score(&mut self, delta: f32) {
        if self.double_score_remaining > 0.0 {
            self.double_score_remaining = (self.double_score_remaining - delta).max(0.0);
        }
    }

    pub fn on_big_fish_spawned(&mut self) {
        self.big_fish_count += 1.0;
    }

    pub fn on_eaten_fish_removed(&mut self) {
        if self.big_fish_count > 0.0 {
            self.big_fish_count -= 0.25;
        }
    }

    /// Latch the game over. Returns `true` only the first time in a run.
    pub fn mark_game_over(&mut self) -> bool {
        !std::mem::replace(&mut self.game_over, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_eats_reach_tier_two() {
        let mut session = Session::new(ScoreRules::default(), TierTable::from_pairs([(1, 10), (2, 15)]));
        let grew: Vec<bool> = (0..10).map(|_| session.on_fish_eaten()).collect();
        assert!(grew[..9].iter().all(|g| !g));
        assert!(grew[9]);
        assert_eq!(session.tier(), 2);
        assert_eq!(session.fish_to_next(), 15);
        assert_eq!(session.points(), 100);
    }

    #[test]
    fn double_score_adds_bonus() {
        let mut session = Session::default();
        for _ in 0..10 {
            session.on_bubble_burst();
        }
        assert!(session.double_score_active());
        assert_eq!(session.bubbles_burst(), 0);
        session.on_fish_eaten();
        assert_eq!(session.points(), 50);
    }

    #[test]
    fn burst_while_active_extends() {
        let mut session = Session::default();
        for _ in 0..10 {
            session.on_bubble_burst();
        }
        session.tick_double_score(4.0);
        session.on_bubble_burst();
        assert!((session.double_score_remaining() - 6.5).abs() < 1e-5);
        assert_eq!(session.bubbles_burst(), 0);
        session.tick_double_score(10.0);
        assert!(!session.double_score_active());
        assert_eq!(session.double_score_remaining(), 0.0);
    }

    #[test]
    fn big_fish_counter_wears_down() {
        let mut session = Session::default();
        session.on_big_fish_spawned();
        for _ in 0..5 {
            session.on_eaten_fish_removed();
        }
        assert_eq!(session.big_fish_count(), 0.0);
    }

    #[test]
    fn game_over_latches_once() {
        let mut session = Session::default();
        assert!(session.mark_game_over());
        assert!(!session.mark_game_over());
        session.reset();
        assert!(!session.is_game_over());
        assert_eq!(session.tier(), 1);
        assert_eq!(session.fish_to_next(), 10);
    }

    #[test]
    fn reset_keeps_oversized_counter() {
        let mut session = Session::default();
        session.on_big_fish_spawned();
        session.on_big_fish_spawned();
        session.on_eaten_fish_removed();
        session.reset();
        assert_eq!(session.big_fish_count(), 1.75);
        assert_eq!(session.points(), 0);
    }
}
