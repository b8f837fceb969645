//! Running games in real time.
//!
//! A session is a single tokio task that owns the current `GameState` and
//! its countdown. Clicks arrive as `Command`s on an mpsc channel; ticks come
//! from an interval owned by the same task, so the two never interleave
//! inside a transition.
//!
//! The interval starts with each game and is dropped as soon as the game
//! is won or lost, or replaced by a new game. A finished or superseded
//! game therefore never sees another tick.
//!
//! After every change the actor publishes a `SessionFrame` on a watch
//! channel for the presentation layer to redraw from.
//!
//! ```no_run
//! use star_match::session::{spawn, SessionConfig};
//!
//! # async fn demo() -> Result<(), star_match::session::SessionError> {
//! let (mut handle, _task) = spawn(SessionConfig::default(), 42);
//!
//! handle.toggle(3).await?;
//! let latest = handle.changed().await?;
//! println!("{} seconds left", latest.frame.time_left);
//! # Ok(())
//! # }
//! ```

mod actor;
mod config;
mod error;

pub use actor::{spawn, Command, SessionFrame, SessionHandle};
pub use config::{SessionConfig, DEFAULT_TICK_PERIOD};
pub use error::SessionError;
