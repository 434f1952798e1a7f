//! Fish-to-next-tier thresholds.
//!
//! Each tier needs a number of fish eaten before the player grows into the
//! next one. Tiers past the end of the table all use the fallback.
use rustc_hash::FxHashMap;

pub const DEFAULT_TIER_FALLBACK: u32 = 720;

const DEFAULT_TIERS: [(i32, u32); 10] = [
    (1, 10),
    (2, 15),
    (3, 25),
    (4, 40),
    (5, 65),
    (6, 105),
    (7, 170),
    (8, 275),
    (9, 445),
    (10, 720),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    thresholds: FxHashMap<i32, u32>,
    fallback: u32,
}

impl Default for TierTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TIERS)
    }
}

impl TierTable {
    /// Table with the given `(tier, fish needed)` pairs and the default fallback.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, u32)>) -> Self {
        Self {
            thresholds: pairs.into_iter().collect(),
            fallback: DEFAULT_TIER_FALLBACK,
        }
    }

    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Fish to eat at `tier` before growing.
    pub fn fish_needed(&self, tier: i32) -> u32 {
        self.thresholds.get(&tier).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_values() {
        let table = TierTable::default();
        assert_eq!(table.fish_needed(1), 10);
        assert_eq!(table.fish_needed(6), 105);
        assert_eq!(table.fish_needed(10), 720);
    }

    #[test]
    fn missing_tier_uses_fallback() {
        let table = TierTable::from_pairs([(1, 10), (2, 15)]);
        assert_eq!(table.fish_needed(3), DEFAULT_TIER_FALLBACK);
        assert_eq!(table.fish_needed(0), DEFAULT_TIER_FALLBACK);
        assert_eq!(table.with_fallback(5).fish_needed(42), 5);
    }
}
