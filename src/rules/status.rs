//! Derived display state: per-number status, game outcome, render frame.
//!
//! None of these are stored. They are recomputed from a `GameState` every
//! time the presentation layer asks.

use serde::{Deserialize, Serialize};

/// How a number on the board should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatus {
    /// In the pool and not selected.
    Available,
    /// Already matched away.
    Used,
    /// Selected, and the selection does not exceed the target.
    Candidate,
    /// Selected, and the selection overshoots the target.
    Wrong,
}

impl NumberStatus {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NumberStatus::Available => "available",
            NumberStatus::Used => "used",
            NumberStatus::Candidate => "candidate",
            NumberStatus::Wrong => "wrong",
        }
    }

    /// Check if the number is part of the current selection.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, NumberStatus::Candidate | NumberStatus::Wrong)
    }
}

impl std::fmt::Display for NumberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Pool non-empty, time left.
    Active,
    /// Pool exhausted (even if the clock hit zero at the same moment).
    Won,
    /// Clock hit zero with numbers still in the pool.
    Lost,
}

impl Outcome {
    /// Classify from the two values that decide it. Win is checked first.
    #[must_use]
    pub const fn from_parts(pool_size: usize, time_left: u32) -> Self {
        if pool_size == 0 {
            Outcome::Won
        } else if time_left == 0 {
            Outcome::Lost
        } else {
            Outcome::Active
        }
    }

    /// Check if the game still accepts moves.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Outcome::Active)
    }

    /// Check if the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !self.is_active()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Active => "active",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        })
    }
}

/// Everything the presentation layer draws for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Stars to show. `None` once the game is over.
    pub target: Option<u32>,

    /// Status of every number on the board, ascending.
    pub numbers: Vec<(u32, NumberStatus)>,

    /// Seconds remaining.
    pub time_left: u32,

    /// Current outcome.
    pub outcome: Outcome,
}

impl Frame {
    /// Status of a single number, if it is on the board.
    #[must_use]
    pub fn status_of(&self, number: u32) -> Option<NumberStatus> {
        self.numbers
            .iter()
            .find(|(n, _)| *n == number)
            .map(|&(_, status)| status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_parts() {
        assert_eq!(Outcome::from_parts(9, 10), Outcome::Active);
        assert_eq!(Outcome::from_parts(0, 5), Outcome::Won);
        assert_eq!(Outcome::from_parts(2, 0), Outcome::Lost);
        // Pool emptied exactly as time ran out
        assert_eq!(Outcome::from_parts(0, 0), Outcome::Won);
    }

    #[test]
    fn test_outcome_flags() {
        assert!(Outcome::Active.is_active());
        assert!(Outcome::Won.is_over());
        assert!(Outcome::Lost.is_over());
    }

    #[test]
    fn test_status_names() {
        assert_eq!(NumberStatus::Available.to_string(), "available");
        assert_eq!(NumberStatus::Wrong.as_str(), "wrong");
        assert!(NumberStatus::Candidate.is_selected());
        assert!(!NumberStatus::Used.is_selected());
    }

    #[test]
    fn test_frame_serde() {
        let frame = Frame {
            target: Some(4),
            numbers: vec![(1, NumberStatus::Used), (2, NumberStatus::Candidate)],
            time_left: 7,
            outcome: Outcome::Active,
        };

        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""candidate""#));
        assert!(json.contains(r#""outcome":"active""#));

        let deserialized: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, deserialized);
        assert_eq!(deserialized.status_of(1), Some(NumberStatus::Used));
        assert_eq!(deserialized.status_of(3), None);
    }
}
