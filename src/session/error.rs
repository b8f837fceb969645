//! Session errors.

use thiserror::Error;

/// Errors talking to a session actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session has shut down")]
    Closed,
}
