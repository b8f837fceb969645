//! Actions: the two events that drive a game.
//!
//! - `Toggle(n)`: the player clicked number `n`
//! - `Tick`: one second elapsed
//!
//! Both arrive through the same channel and are applied one at a time.

use serde::{Deserialize, Serialize};

/// A player or timer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Select or deselect a number.
    Toggle(u32),
    /// One timer period elapsed.
    Tick,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Toggle(n) => write!(f, "Toggle({})", n),
            Action::Tick => write!(f, "Tick"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the game's action sequence (starts at 0).
    pub sequence: u32,

    /// Seconds left when the action was applied.
    pub time_left: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32, time_left: u32) -> Self {
        Self {
            action,
            sequence,
            time_left,
        }
    }
}
