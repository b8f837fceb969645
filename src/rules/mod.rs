//! Rules of the star-matching puzzle.
//!
//! - `StarMatch`: starts games and applies clicks and ticks
//! - `NumberStatus`, `Outcome`, `Frame`: derived display state
//!
//! Transitions never fail. Impossible states (a corrupted pool, duplicate
//! selections) panic instead of being patched up.

pub mod engine;
pub mod status;

pub use engine::{StarMatch, Transition};
pub use status::{Frame, NumberStatus, Outcome};
