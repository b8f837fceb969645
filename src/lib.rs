//! # star-match
//!
//! Engine for the star-matching number puzzle: a number of stars is shown,
//! and the player picks numbers from 1-9 that add up to it. Matched numbers
//! leave the board and a new star count is drawn from what is left. Clear
//! the board before the clock runs out to win.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A game is a `GameState` value. `StarMatch` turns
//!    `(state, action)` into the next state; nothing is hidden in globals.
//!
//! 2. **Deterministic**: All randomness flows from a seeded `GameRng`
//!    through the `RandomSource` trait, so games replay exactly.
//!
//! 3. **One Event Stream**: Clicks and clock ticks are the same kind of
//!    `Action`, applied one at a time by a single owner.
//!
//! ## Modules
//!
//! - `core`: Configuration, actions, state, RNG
//! - `combinatorics`: Sums, ranges, attainable-sum sampling
//! - `rules`: The `StarMatch` engine and derived display state
//! - `session`: Async actor that owns a game and its countdown
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use star_match::{GameConfig, Outcome, StarMatch};
//!
//! let game = StarMatch::new(GameConfig::default());
//! let mut state = game.new_game(42);
//!
//! for _ in 0..10 {
//!     game.tick(&mut state);
//! }
//! assert_eq!(game.outcome(&state), Outcome::Lost);
//! ```

pub mod core;
pub mod combinatorics;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Candidates,
    GameConfig, GameRng, GameRngState, GameState, RandomSource,
};

pub use crate::rules::{Frame, NumberStatus, Outcome, StarMatch, Transition};

pub use crate::session::{SessionConfig, SessionError, SessionFrame, SessionHandle};
