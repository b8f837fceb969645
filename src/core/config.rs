//! Game configuration.
//!
//! A `GameConfig` fixes the shape of a game at creation time:
//! - `max_number`: the pool starts as `1..=max_number`
//! - `time_budget`: seconds on the clock at game start
//! - `target_ceiling`: upper bound for every drawn target
//!
//! Defaults reproduce the classic game (numbers 1-9, ten seconds, targets
//! up to nine stars).

use serde::{Deserialize, Serialize};

/// Largest number on the board in the classic game.
pub const DEFAULT_MAX_NUMBER: u32 = 9;

/// Seconds on the clock at the start of a classic game.
pub const DEFAULT_TIME_BUDGET: u32 = 10;

/// Largest target the classic game ever draws.
///
/// Fixed, not derived from what is left in the pool.
pub const DEFAULT_TARGET_CEILING: u32 = 9;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest number in the starting pool (pool is `1..=max_number`).
    pub max_number: u32,

    /// Seconds remaining at game start.
    pub time_budget: u32,

    /// Upper bound for the target drawn after each match.
    pub target_ceiling: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
            time_budget: DEFAULT_TIME_BUDGET,
            target_ceiling: DEFAULT_TARGET_CEILING,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highest number on the board.
    #[must_use]
    pub fn with_max_number(mut self, max_number: u32) -> Self {
        assert!(max_number >= 1, "Board must hold at least one number");
        self.max_number = max_number;
        self
    }

    /// Set the starting clock, in seconds.
    #[must_use]
    pub fn with_time_budget(mut self, seconds: u32) -> Self {
        self.time_budget = seconds;
        self
    }

    /// Set the target ceiling.
    #[must_use]
    pub fn with_target_ceiling(mut self, ceiling: u32) -> Self {
        assert!(ceiling >= 1, "Target ceiling must be at least 1");
        self.target_ceiling = ceiling;
        self
    }

    /// Check that the settings work together.
    ///
    /// Every target is drawn from sums `<= target_ceiling`, so the ceiling
    /// must reach the largest number on the board. Otherwise a pool left
    /// holding only large numbers has nothing to draw.
    ///
    /// Panics if the ceiling is below `max_number`.
    pub fn validate(&self) {
        assert!(
            self.target_ceiling >= self.max_number,
            "Target ceiling {} is below the largest number {}",
            self.target_ceiling,
            self.max_number
        );
    }

    /// Upper bound for the opening target.
    ///
    /// Every value up to this bound is attainable because the full pool
    /// contains it as a single number.
    #[must_use]
    pub fn opening_target_max(&self) -> u32 {
        self.max_number.min(self.target_ceiling)
    }
}
