//! The star-match rules: new games, clicks, ticks, outcome.
//!
//! `StarMatch` holds only configuration. All game data lives in the
//! `GameState` passed to each call, so one engine can drive any number of
//! games and a state can be snapshotted between any two actions.

use tracing::{debug, trace};

use crate::combinatorics::{random_attainable_sum, random_int, range};
use crate::core::{Action, ActionRecord, Candidates, GameConfig, GameState};

use super::status::{Frame, NumberStatus, Outcome};

/// What an action did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed: a used number, or the game is already over.
    Ignored,
    /// A number joined the selection without completing it.
    Selected {
        number: u32,
        /// Selection total afterwards.
        sum: u32,
    },
    /// A number left the selection without completing it.
    Deselected {
        number: u32,
        /// Selection total afterwards.
        sum: u32,
    },
    /// The selection hit the target and was retired.
    Matched {
        /// Retired numbers, in click order.
        retired: Candidates,
        /// Freshly drawn target, `None` if the pool ran out.
        next_target: Option<u32>,
    },
    /// One second came off the clock.
    Ticked {
        /// Seconds left afterwards.
        time_left: u32,
    },
}

impl Transition {
    /// Check if the state changed.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

/// Rules engine for the star-matching puzzle.
#[derive(Clone, Debug, Default)]
pub struct StarMatch {
    config: GameConfig,
}

impl StarMatch {
    /// Create an engine with the given configuration.
    ///
    /// Panics if the configuration is inconsistent (see
    /// [`GameConfig::validate`]).
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        config.validate();
        Self { config }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game: full pool, empty selection, full clock, random target.
    #[must_use]
    pub fn new_game(&self, seed: u64) -> GameState {
        let mut state = GameState::new(
            0,
            range(1, self.config.max_number),
            self.config.time_budget,
            seed,
        );
        let target = random_int(&mut state.rng, 1, self.config.opening_target_max());
        state.set_target(target);

        trace!(seed, target, "new game");
        state
    }

    /// Status of a number for display.
    #[must_use]
    pub fn classify(&self, state: &GameState, number: u32) -> NumberStatus {
        if !state.in_pool(number) {
            NumberStatus::Used
        } else if state.is_candidate(number) {
            if state.candidate_sum() > state.target() {
                NumberStatus::Wrong
            } else {
                NumberStatus::Candidate
            }
        } else {
            NumberStatus::Available
        }
    }

    /// Current outcome. Win is checked before loss.
    #[must_use]
    pub fn outcome(&self, state: &GameState) -> Outcome {
        Outcome::from_parts(state.pool().len(), state.time_left())
    }

    /// Apply a player click on `number`.
    ///
    /// Selecting or deselecting is always allowed, even when the selection
    /// overshoots. When the selection total equals the target, the
    /// selected numbers leave the pool and a new target is drawn from what
    /// remains (unless nothing remains).
    ///
    /// Once the game is decided, clicks are ignored and not recorded.
    pub fn toggle(&self, state: &mut GameState, number: u32) -> Transition {
        if self.outcome(state).is_over() {
            trace!(number, "click after game over");
            return Transition::Ignored;
        }
        self.record(state, Action::Toggle(number));

        let status = self.classify(state, number);
        if status == NumberStatus::Used {
            trace!(number, "click on used number");
            return Transition::Ignored;
        }

        let selected = !status.is_selected();
        if selected {
            state.add_candidate(number);
        } else {
            state.remove_candidate(number);
        }

        let sum = state.candidate_sum();
        if sum != state.target() {
            return if selected {
                Transition::Selected { number, sum }
            } else {
                Transition::Deselected { number, sum }
            };
        }

        let retired = state.retire_candidates();
        let next_target = if state.pool().is_empty() {
            None
        } else {
            let pool = state.pool_numbers();
            let target = random_attainable_sum(&mut state.rng, &pool, self.config.target_ceiling);
            state.set_target(target);
            Some(target)
        };

        debug!(?retired, ?next_target, remaining = state.pool().len(), "matched");
        Transition::Matched {
            retired,
            next_target,
        }
    }

    /// Take one second off the clock while the game is active.
    pub fn tick(&self, state: &mut GameState) -> Transition {
        if self.outcome(state).is_over() {
            return Transition::Ignored;
        }
        self.record(state, Action::Tick);

        state.decrement_time();
        Transition::Ticked {
            time_left: state.time_left(),
        }
    }

    /// Apply any action.
    pub fn apply_action(&self, state: &mut GameState, action: &Action) -> Transition {
        match *action {
            Action::Toggle(number) => self.toggle(state, number),
            Action::Tick => self.tick(state),
        }
    }

    /// Pure transition: returns the next state, leaving `state` untouched.
    #[must_use]
    pub fn step(&self, state: &GameState, action: &Action) -> GameState {
        let mut next = state.clone();
        self.apply_action(&mut next, action);
        next
    }

    /// Status of every number on the board, ascending.
    #[must_use]
    pub fn board(&self, state: &GameState) -> Vec<(u32, NumberStatus)> {
        range(1, self.config.max_number)
            .into_iter()
            .map(|number| (number, self.classify(state, number)))
            .collect()
    }

    /// Render inputs for the current state.
    #[must_use]
    pub fn frame(&self, state: &GameState) -> Frame {
        let outcome = self.outcome(state);
        Frame {
            target: outcome.is_active().then(|| state.target()),
            numbers: self.board(state),
            time_left: state.time_left(),
            outcome,
        }
    }

    /// Rebuild a game from its seed and action list.
    #[must_use]
    pub fn replay<'a>(&self, seed: u64, actions: impl IntoIterator<Item = &'a Action>) -> GameState {
        let mut state = self.new_game(seed);
        for action in actions {
            self.apply_action(&mut state, action);
        }
        state
    }

    fn record(&self, state: &mut GameState, action: Action) {
        let sequence = state.next_sequence();
        let time_left = state.time_left();
        state.record_action(ActionRecord::new(action, sequence, time_left));
    }
}
