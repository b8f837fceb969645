//! Core engine types: configuration, actions, state, RNG.
//!
//! The rules engine in `crate::rules` is the only code that moves a
//! `GameState` forward; everything here is plain data plus invariant checks.

pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, DEFAULT_MAX_NUMBER, DEFAULT_TARGET_CEILING, DEFAULT_TIME_BUDGET};
pub use action::{Action, ActionRecord};
pub use state::{Candidates, GameState};
