//! Game state: target, pool, candidates and clock.
//!
//! ## GameState
//!
//! Everything a game needs to continue:
//! - Target value (the number of stars)
//! - Pool of numbers not yet matched away
//! - Candidate selection, in click order
//! - Seconds left on the clock
//! - RNG and action history
//!
//! Uses `im` persistent data structures so a snapshot can be taken after
//! every transition for the cost of a few pointer copies.
//!
//! Mutation is crate-private: only the rules engine moves a state forward.
//! That includes the RNG, so a state cannot be drawn from behind the
//! engine's back:
//!
//! ```compile_fail
//! use star_match::{GameState, RandomSource};
//!
//! let mut state = GameState::new(3, [1, 2, 3], 10, 42);
//! state.rng.random_int(1, 9);
//! ```

use im::{OrdSet, Vector};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::rng::{GameRng, GameRngState};

/// Inline capacity for candidate selections (the whole classic board).
pub type Candidates = SmallVec<[u32; 9]>;

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current number of stars to match.
    target: u32,

    /// Numbers still on the board.
    pool: OrdSet<u32>,

    /// Selected numbers, in click order. Always a subset of `pool`.
    candidates: Candidates,

    /// Seconds remaining.
    time_left: u32,

    /// Deterministic RNG for target draws.
    pub(crate) rng: GameRng,

    /// Every action applied to this game.
    history: Vector<ActionRecord>,

    /// Next action sequence number.
    action_sequence: u32,
}

impl GameState {
    /// Create a state with an empty selection.
    #[must_use]
    pub fn new(target: u32, pool: impl IntoIterator<Item = u32>, time_left: u32, seed: u64) -> Self {
        Self::from_parts(target, pool, std::iter::empty(), time_left, seed)
    }

    /// Build a state from explicit parts.
    ///
    /// Panics if the parts break a state invariant: zero in the pool,
    /// duplicate candidates, or a candidate missing from the pool.
    #[must_use]
    pub fn from_parts(
        target: u32,
        pool: impl IntoIterator<Item = u32>,
        candidates: impl IntoIterator<Item = u32>,
        time_left: u32,
        seed: u64,
    ) -> Self {
        let pool: OrdSet<u32> = pool.into_iter().collect();
        assert!(!pool.contains(&0), "Pool numbers start at 1");

        let mut state = Self {
            target,
            pool,
            candidates: Candidates::new(),
            time_left,
            rng: GameRng::new(seed),
            history: Vector::new(),
            action_sequence: 0,
        };
        for number in candidates {
            state.add_candidate(number);
        }
        state
    }

    // === Queries ===

    /// The current target.
    ///
    /// Only meaningful while the pool is non-empty.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Numbers still on the board.
    #[must_use]
    pub fn pool(&self) -> &OrdSet<u32> {
        &self.pool
    }

    /// Pool contents in ascending order.
    #[must_use]
    pub fn pool_numbers(&self) -> Vec<u32> {
        self.pool.iter().copied().collect()
    }

    /// Check if a number is still on the board.
    #[must_use]
    pub fn in_pool(&self, number: u32) -> bool {
        self.pool.contains(&number)
    }

    /// Selected numbers, in click order.
    #[must_use]
    pub fn candidates(&self) -> &[u32] {
        &self.candidates
    }

    /// Check if a number is currently selected.
    #[must_use]
    pub fn is_candidate(&self, number: u32) -> bool {
        self.candidates.contains(&number)
    }

    /// Sum of the current selection.
    #[must_use]
    pub fn candidate_sum(&self) -> u32 {
        crate::combinatorics::sum(&self.candidates)
    }

    /// Seconds remaining.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Actions applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Checkpoint of the RNG stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Transitions (engine only) ===

    pub(crate) fn add_candidate(&mut self, number: u32) {
        assert!(
            self.pool.contains(&number),
            "Candidate {} is not in the pool",
            number
        );
        assert!(
            !self.candidates.contains(&number),
            "Candidate {} selected twice",
            number
        );
        self.candidates.push(number);
    }

    pub(crate) fn remove_candidate(&mut self, number: u32) {
        self.candidates.retain(|&mut c| c != number);
    }

    /// Move every candidate out of the pool, returning them in click order.
    pub(crate) fn retire_candidates(&mut self) -> Candidates {
        let retired = std::mem::take(&mut self.candidates);
        for number in &retired {
            let removed = self.pool.remove(number);
            assert!(removed.is_some(), "Retired {} twice", number);
        }
        retired
    }

    pub(crate) fn set_target(&mut self, target: u32) {
        self.target = target;
    }

    /// Take one second off the clock, never going below zero.
    pub(crate) fn decrement_time(&mut self) {
        self.time_left = self.time_left.saturating_sub(1);
    }

    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}
