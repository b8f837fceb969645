//! The session actor and its handle.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, instrument};

use crate::core::{GameRng, GameState};
use crate::rules::{Frame, StarMatch};

use super::config::SessionConfig;
use super::error::SessionError;

/// Requests from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The player clicked a number.
    Toggle(u32),
    /// Discard the current game and start another. Without a seed, the
    /// next seed comes from the session's master RNG.
    NewGame { seed: Option<u64> },
    /// Stop the actor.
    Shutdown,
}

/// A frame tagged with the game it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFrame {
    /// Counts games started by this session, from 1.
    pub game_id: u32,
    /// Render inputs.
    pub frame: Frame,
}

/// Client side of a session.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    frames: watch::Receiver<SessionFrame>,
}

impl SessionHandle {
    /// Forward a click.
    pub async fn toggle(&self, number: u32) -> Result<(), SessionError> {
        self.send(Command::Toggle(number)).await
    }

    /// Replace the current game with a new one.
    pub async fn new_game(&self, seed: Option<u64>) -> Result<(), SessionError> {
        self.send(Command::NewGame { seed }).await
    }

    /// Ask the actor to stop.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(Command::Shutdown).await
    }

    /// Latest published frame.
    #[must_use]
    pub fn frame(&self) -> SessionFrame {
        self.frames.borrow().clone()
    }

    /// Wait for the next published frame.
    pub async fn changed(&mut self) -> Result<SessionFrame, SessionError> {
        self.frames
            .changed()
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(self.frames.borrow_and_update().clone())
    }

    /// Wait until a published frame satisfies `predicate`.
    ///
    /// Checks the current frame first.
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&SessionFrame) -> bool,
    ) -> Result<SessionFrame, SessionError> {
        let frame = self
            .frames
            .wait_for(predicate)
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(frame.clone())
    }

    async fn send(&self, command: Command) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

/// Start a session on the current tokio runtime.
///
/// The first game is seeded from `seed`; later games without an explicit
/// seed take successive seeds forked from it. The actor runs until it
/// receives `Command::Shutdown` or every handle is dropped.
pub fn spawn(config: SessionConfig, seed: u64) -> (SessionHandle, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
    let session = Session::new(config, seed);
    let (frame_tx, frame_rx) = watch::channel(session.snapshot());

    let task = tokio::spawn(session.run(command_rx, frame_tx));
    let handle = SessionHandle {
        commands: command_tx,
        frames: frame_rx,
    };
    (handle, task)
}

/// Actor state. Owns the only copy of the game, so clicks and ticks are
/// applied strictly one after another.
struct Session {
    engine: StarMatch,
    config: SessionConfig,
    rng: GameRng,
    state: GameState,
    game_id: u32,
    /// Countdown; `None` while no game is active.
    timer: Option<Interval>,
}

impl Session {
    fn new(config: SessionConfig, seed: u64) -> Self {
        let engine = StarMatch::new(config.game);
        let mut rng = GameRng::new(seed);
        let state = engine.new_game(rng.fork_seed());
        Self {
            engine,
            config,
            rng,
            state,
            game_id: 1,
            timer: None,
        }
    }

    fn snapshot(&self) -> SessionFrame {
        SessionFrame {
            game_id: self.game_id,
            frame: self.engine.frame(&self.state),
        }
    }

    fn start_timer(&mut self) {
        self.timer = None;
        if self.engine.outcome(&self.state).is_active() {
            let period = self.config.tick_period;
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            self.timer = Some(timer);
        }
    }

    fn start_game(&mut self, seed: Option<u64>, frames: &watch::Sender<SessionFrame>) {
        let seed = seed.unwrap_or_else(|| self.rng.fork_seed());
        self.state = self.engine.new_game(seed);
        self.game_id += 1;
        self.start_timer();

        info!(game = self.game_id, seed, target = self.state.target(), "new game");
        self.publish(frames);
    }

    /// Send the current frame, cancelling the timer once the game is over.
    fn publish(&mut self, frames: &watch::Sender<SessionFrame>) {
        let outcome = self.engine.outcome(&self.state);
        if outcome.is_over() && self.timer.take().is_some() {
            info!(game = self.game_id, %outcome, time_left = self.state.time_left(), "game over");
        }
        frames.send_replace(self.snapshot());
    }

    #[instrument(skip_all, fields(seed = self.rng.seed()))]
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        frames: watch::Sender<SessionFrame>,
    ) {
        info!(game = self.game_id, target = self.state.target(), "session started");
        self.start_timer();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Toggle(number)) => {
                        let transition = self.engine.toggle(&mut self.state, number);
                        if !transition.is_ignored() {
                            debug!(game = self.game_id, number, ?transition, "click");
                            self.publish(&frames);
                        }
                    }
                    Some(Command::NewGame { seed }) => self.start_game(seed, &frames),
                    Some(Command::Shutdown) | None => break,
                },
                () = next_tick(&mut self.timer) => {
                    self.engine.tick(&mut self.state);
                    self.publish(&frames);
                }
            }
        }

        info!(games = self.game_id, "session stopped");
    }
}

/// Resolve on the next timer tick, or never if there is no timer.
async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
