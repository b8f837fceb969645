//! Deterministic random number generation for target draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Derive independent seeds for successive games
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: Combinatorics code only sees the `RandomSource` trait
//!
//! ## Usage
//!
//! ```
//! use star_match::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.random_int(1, 9);
//! assert!((1..=9).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.random_int(1, 9), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integers.
///
/// The combinatorics helpers take randomness through this trait so tests
/// can substitute a scripted source for the seeded one.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends included.
    ///
    /// Callers guarantee `min <= max`.
    fn random_int(&mut self, min: u32, max: u32) -> u32;
}

/// Deterministic RNG backing every game.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a seed for an independent stream.
    ///
    /// Each call yields a different but deterministic seed. Sessions use
    /// this to seed every new game from one master RNG.
    pub fn fork_seed(&mut self) -> u64 {
        self.fork_counter += 1;
        self.seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
