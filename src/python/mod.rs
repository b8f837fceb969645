//! Python bindings for the star-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import star_match
//!
//! game = star_match.StarMatch(seed=42)
//! print(game.target, game.pool)
//!
//! game.toggle(4)
//! game.tick()
//! print(game.classify(4), game.outcome)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// star-match: the star-matching number puzzle.
#[pymodule]
fn star_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStarMatch>()?;
    Ok(())
}
