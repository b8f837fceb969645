//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, GameState};
use crate::rules::{StarMatch, Transition};

/// Python wrapper for one star-match game.
///
/// Owns both the engine and the state; the Python side drives ticks
/// itself.
#[pyclass(name = "StarMatch")]
pub struct PyStarMatch {
    rules: StarMatch,
    state: GameState,
}

#[pymethods]
impl PyStarMatch {
    /// Start a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - max_number: Highest number on the board
    /// - time_budget: Seconds on the clock
    /// - target_ceiling: Largest target ever drawn
    #[new]
    #[pyo3(signature = (seed = 42, max_number = 9, time_budget = 10, target_ceiling = 9))]
    fn new(seed: u64, max_number: u32, time_budget: u32, target_ceiling: u32) -> PyResult<Self> {
        if max_number == 0 || target_ceiling < max_number {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Need 1 <= max_number <= target_ceiling, got max_number={} target_ceiling={}",
                max_number, target_ceiling
            )));
        }
        let config = GameConfig::new()
            .with_max_number(max_number)
            .with_time_budget(time_budget)
            .with_target_ceiling(target_ceiling);
        let rules = StarMatch::new(config);
        let state = rules.new_game(seed);
        Ok(Self { rules, state })
    }

    /// Click a number. Returns True if it completed a match.
    fn toggle(&mut self, number: u32) -> bool {
        matches!(
            self.rules.toggle(&mut self.state, number),
            Transition::Matched { .. }
        )
    }

    /// Advance the clock by one second.
    fn tick(&mut self) {
        self.rules.tick(&mut self.state);
    }

    /// Display status of a number: "available", "used", "candidate" or "wrong".
    fn classify(&self, number: u32) -> &'static str {
        self.rules.classify(&self.state, number).as_str()
    }

    /// "active", "won" or "lost".
    #[getter]
    fn outcome(&self) -> String {
        self.rules.outcome(&self.state).to_string()
    }

    /// Current star count, or None once the game is over.
    #[getter]
    fn target(&self) -> Option<u32> {
        self.rules.frame(&self.state).target
    }

    /// Seconds remaining.
    #[getter]
    fn time_left(&self) -> u32 {
        self.state.time_left()
    }

    /// Numbers still on the board, ascending.
    #[getter]
    fn pool(&self) -> Vec<u32> {
        self.state.pool_numbers()
    }

    /// Selected numbers, in click order.
    #[getter]
    fn candidates(&self) -> Vec<u32> {
        self.state.candidates().to_vec()
    }

    /// Copy the game, including its RNG position.
    fn copy(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "StarMatch(target={}, pool={:?}, time_left={}, status={})",
            self.state.target(),
            self.state.pool_numbers(),
            self.state.time_left(),
            self.rules.outcome(&self.state)
        )
    }
}
