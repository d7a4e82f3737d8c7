//! The single live round, its lock, and the hand-off of finished results.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use crate::adapters::ResultSink;
use crate::config::game::GameConfig;
use crate::domain::{Player, PlayerId, Round, RoundResult, RoundStatus, SweepOutcome};
use crate::errors::DomainError;

/// Body of a successful `POST /guess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessReply {
    pub black: u8,
    pub white: u8,
    pub message: String,
}

struct EngineState {
    round: Round,
    rng: ChaCha8Rng,
}

/// Serializes every operation on the round behind one mutex.
///
/// No I/O happens while the lock is held. A finished round is cloned out and
/// handed to the result sink on a spawned task after the guard is dropped.
pub struct RoundEngine {
    inner: Mutex<EngineState>,
    sink: Arc<dyn ResultSink>,
    inactivity_timeout: Duration,
}

impl std::fmt::Debug for RoundEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEngine")
            .field("inactivity_timeout", &self.inactivity_timeout)
            .finish_non_exhaustive()
    }
}

impl RoundEngine {
    pub fn new(config: &GameConfig, sink: Arc<dyn ResultSink>) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            inner: Mutex::new(EngineState {
                round: Round::new(),
                rng,
            }),
            sink,
            inactivity_timeout: config.inactivity_timeout,
        }
    }

    pub fn inactivity_timeout(&self) -> Duration {
        self.inactivity_timeout
    }

    pub fn add_player(&self, name: &str) -> Result<Player, DomainError> {
        let player = self.inner.lock().round.add_player(name, now())?;
        info!(player_id = %player.id, player_name = %player.name, "Player joined");
        Ok(player)
    }

    /// Returns `true` when this call started the round.
    pub fn mark_ready(&self, player_id: &PlayerId) -> Result<bool, DomainError> {
        let mut guard = self.inner.lock();
        let state = &mut *guard;
        let started = state.round.mark_ready(player_id, now(), &mut state.rng)?;

        info!(player_id = %player_id, round_started = started, "Player marked ready");
        if started {
            info!(
                players = state.round.turn_order_names().len(),
                "All players ready, round started"
            );
            debug!(secret = %state.round.secret, "Secret drawn");
        }
        Ok(started)
    }

    pub fn process_guess(
        &self,
        player_id: &PlayerId,
        guess: &str,
    ) -> Result<GuessReply, DomainError> {
        let outcome = self
            .inner
            .lock()
            .round
            .process_guess(player_id, guess, now())?;

        debug!(
            player_id = %player_id,
            black = outcome.pegs.black,
            white = outcome.pegs.white,
            "Guess evaluated"
        );

        if let Some(result) = outcome.finished {
            info!(
                winner_id = %result.winner_id,
                winner_name = %result.winner_name,
                "Round won"
            );
            self.dispatch_persist(result);
        }

        Ok(GuessReply {
            black: outcome.pegs.black,
            white: outcome.pegs.white,
            message: outcome.message,
        })
    }

    /// Run one inactivity check against the wall clock.
    pub fn sweep_idle(&self) -> SweepOutcome {
        self.sweep_idle_at(now())
    }

    pub fn sweep_idle_at(&self, at: OffsetDateTime) -> SweepOutcome {
        let outcome = self
            .inner
            .lock()
            .round
            .sweep_idle(at, self.inactivity_timeout);

        match &outcome {
            SweepOutcome::Inactive | SweepOutcome::Healthy => {}
            SweepOutcome::SkippedMissing { player_id } => {
                warn!(player_id = %player_id, "Turn holder has no player record, skipping");
            }
            SweepOutcome::Evicted { player } => {
                warn!(
                    player_id = %player.id,
                    player_name = %player.name,
                    "Player removed for inactivity"
                );
            }
            SweepOutcome::Aborted { player } => {
                warn!(
                    player_id = %player.id,
                    player_name = %player.name,
                    "Player removed for inactivity, not enough players left, round aborted"
                );
            }
        }
        outcome
    }

    pub fn status(&self) -> RoundStatus {
        self.inner.lock().round.status()
    }

    pub fn turn_order(&self) -> Vec<String> {
        self.inner.lock().round.turn_order_names()
    }

    /// The most recently finished round, if any.
    pub fn result(&self) -> Option<RoundResult> {
        self.inner.lock().round.result().cloned()
    }

    fn dispatch_persist(&self, result: RoundResult) {
        let sink = Arc::clone(&self.sink);
        let Ok(handle) = Handle::try_current() else {
            error!(winner_id = %result.winner_id, "No async runtime, round result not persisted");
            return;
        };
        handle.spawn(async move {
            match sink.persist(&result).await {
                Ok(persisted) => {
                    info!(path = %persisted.path.display(), "Round result persisted");
                }
                Err(e) => {
                    error!(
                        error = %e,
                        winner_id = %result.winner_id,
                        "Failed to persist round result"
                    );
                }
            }
        });
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
