//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Period of the countdown clock in the classic game.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Configuration for a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rules for every game the session starts.
    pub game: GameConfig,

    /// Wall-clock time per tick.
    pub tick_period: Duration,

    /// Commands buffered before senders wait.
    pub command_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_period: DEFAULT_TICK_PERIOD,
            command_buffer: 64,
        }
    }
}

impl SessionConfig {
    /// Create a session configuration for the given rules.
    #[must_use]
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Set the tick period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        assert!(!period.is_zero(), "Tick period must be positive");
        self.tick_period = period;
        self
    }

    /// Set the command buffer size.
    #[must_use]
    pub fn with_command_buffer(mut self, size: usize) -> Self {
        assert!(size > 0, "Command buffer must hold at least one command");
        self.command_buffer = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();

        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.command_buffer, 64);
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new(GameConfig::new().with_time_budget(3))
            .with_tick_period(Duration::from_millis(250))
            .with_command_buffer(8);

        assert_eq!(config.game.time_budget, 3);
        assert_eq!(config.tick_period, Duration::from_millis(250));
        assert_eq!(config.command_buffer, 8);
    }

    #[test]
    #[should_panic(expected = "Tick period must be positive")]
    fn test_zero_tick_period() {
        let _ = SessionConfig::default().with_tick_period(Duration::ZERO);
    }
}
