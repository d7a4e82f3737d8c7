//! The round state machine.
//!
//! `Round` is plain data plus synchronous transitions. It knows nothing
//! about locking, clocks or I/O: callers pass `now` and an RNG in, and get
//! back values describing what happened. `RoundEngine` owns the single
//! instance behind a mutex.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;

use super::code::Code;
use super::pegs::{evaluate, Pegs};
use super::player::{Player, PlayerId};
use super::result::{AttemptCount, RoundResult};
use crate::errors::DomainError;

/// Lobby capacity.
pub const MAX_PLAYERS: usize = 4;

/// A round never starts, or continues, with fewer players than this.
pub const MIN_PLAYERS: usize = 2;

pub const NEXT_TURN_MESSAGE: &str = "next player's turn";

/// Read-only projection served by `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    pub round_active: bool,
    pub players: usize,
    pub ready: usize,
    /// Empty unless a round is active.
    pub current_turn: String,
}

/// What a well-formed guess from the right player produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub pegs: Pegs,
    pub message: String,
    /// Set when this guess won the round; the caller hands it to the result
    /// sink.
    pub finished: Option<RoundResult>,
}

/// What one idle sweep did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// No round running.
    Inactive,
    /// The current player acted recently enough.
    Healthy,
    /// The turn holder had no player record; the turn was advanced.
    SkippedMissing { player_id: PlayerId },
    /// The turn holder was removed and the round continues.
    Evicted { player: Player },
    /// The turn holder was removed and too few players remained.
    Aborted { player: Player },
}

#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) players: HashMap<PlayerId, Player>,
    pub(crate) ready: HashSet<PlayerId>,
    /// Defined only while `active`; a permutation of the ready set at start.
    pub(crate) turn_order: Vec<PlayerId>,
    pub(crate) current_turn: usize,
    pub(crate) secret: Code,
    pub(crate) attempts: HashMap<PlayerId, u32>,
    pub(crate) active: bool,
    pub(crate) started_at: Option<OffsetDateTime>,
    pub(crate) ended_at: Option<OffsetDateTime>,
    pub(crate) result: Option<RoundResult>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            ready: HashSet::new(),
            turn_order: Vec::new(),
            current_turn: 0,
            secret: Code::default(),
            attempts: HashMap::new(),
            active: false,
            started_at: None,
            ended_at: None,
            result: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Player ID whose turn it is, if a round is running.
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        if !self.active {
            return None;
        }
        self.turn_order.get(self.current_turn)
    }

    pub fn add_player(&mut self, name: &str, now: OffsetDateTime) -> Result<Player, DomainError> {
        if self.active {
            return Err(DomainError::RoundInProgress);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::LobbyFull { max: MAX_PLAYERS });
        }
        if self.players.values().any(|p| p.name == name) {
            return Err(DomainError::DuplicateName(name.to_string()));
        }

        let player = Player::new(name, now);
        self.players.insert(player.id.clone(), player.clone());
        Ok(player)
    }

    /// Mark a player ready. Returns `true` when this call started the round.
    pub fn mark_ready<R: Rng + ?Sized>(
        &mut self,
        id: &PlayerId,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> Result<bool, DomainError> {
        let player = self
            .players
            .get_mut(id)
            .ok_or(DomainError::PlayerNotFound)?;
        if self.ready.contains(id) {
            return Err(DomainError::AlreadyReady);
        }

        player.touch(now);
        self.ready.insert(id.clone());

        if self.ready.len() >= MIN_PLAYERS && self.ready.len() == self.players.len() {
            self.start(now, rng);
            return Ok(true);
        }
        Ok(false)
    }

    fn start<R: Rng + ?Sized>(&mut self, now: OffsetDateTime, rng: &mut R) {
        self.secret = Code::random(rng);

        // Sort before shuffling so a seeded RNG yields a reproducible order
        // regardless of hash-set iteration order.
        let mut order: Vec<PlayerId> = self.ready.iter().cloned().collect();
        order.sort();
        order.shuffle(rng);

        self.turn_order = order;
        self.attempts.clear();
        self.current_turn = 0;
        self.active = true;
        self.started_at = Some(now);
        self.ended_at = None;
        self.result = None;
    }

    pub fn process_guess(
        &mut self,
        id: &PlayerId,
        guess: &str,
        now: OffsetDateTime,
    ) -> Result<GuessOutcome, DomainError> {
        if !self.active {
            return Err(DomainError::NoActiveRound);
        }
        if self.turn_order.is_empty() {
            return Err(DomainError::EmptyTurnOrder);
        }
        if self.turn_order[self.current_turn] != *id {
            return Err(DomainError::NotYourTurn);
        }
        let guess: Code = guess.parse()?;

        if let Some(player) = self.players.get_mut(id) {
            player.touch(now);
        }
        *self.attempts.entry(id.clone()).or_insert(0) += 1;

        let pegs = evaluate(&self.secret, &guess);

        if pegs.is_solved() {
            let result = self.finish(id, now);
            let message = format!("Player {} guessed the code!", result.winner_name);
            return Ok(GuessOutcome {
                pegs,
                message,
                finished: Some(result),
            });
        }

        self.advance_turn(now);
        Ok(GuessOutcome {
            pegs,
            message: NEXT_TURN_MESSAGE.to_string(),
            finished: None,
        })
    }

    fn finish(&mut self, winner: &PlayerId, now: OffsetDateTime) -> RoundResult {
        self.active = false;
        self.ended_at = Some(now);

        let attempts = self
            .turn_order
            .iter()
            .filter_map(|pid| {
                let count = *self.attempts.get(pid)?;
                let player_name = self.name_of(pid);
                Some(AttemptCount { player_name, count })
            })
            .collect();

        let result = RoundResult {
            start: self.started_at.unwrap_or(now),
            end: now,
            code: self.secret,
            attempts,
            winner_id: winner.clone(),
            winner_name: self.name_of(winner),
        };
        self.result = Some(result.clone());

        self.ready.clear();
        self.turn_order.clear();
        self.current_turn = 0;
        result
    }

    /// Pass the turn on and refresh the new holder's activity stamp.
    fn advance_turn(&mut self, now: OffsetDateTime) {
        if self.turn_order.is_empty() {
            return;
        }
        self.current_turn = (self.current_turn + 1) % self.turn_order.len();
        let next = &self.turn_order[self.current_turn];
        if let Some(player) = self.players.get_mut(next) {
            player.touch(now);
        }
    }

    /// Evict the turn holder if they have been idle longer than `timeout`.
    ///
    /// Only the current turn holder is inspected, and at most one player is
    /// removed per call.
    pub fn sweep_idle(&mut self, now: OffsetDateTime, timeout: Duration) -> SweepOutcome {
        if !self.active || self.turn_order.is_empty() {
            return SweepOutcome::Inactive;
        }

        let current = self.turn_order[self.current_turn].clone();
        let Some(evicted) = self.players.remove(&current) else {
            self.advance_turn(now);
            return SweepOutcome::SkippedMissing { player_id: current };
        };

        if now - evicted.last_active <= timeout {
            self.players.insert(current, evicted);
            return SweepOutcome::Healthy;
        }

        self.ready.remove(&current);
        self.attempts.remove(&current);
        self.turn_order.remove(self.current_turn);

        if self.turn_order.len() < MIN_PLAYERS {
            self.active = false;
            self.ready.clear();
            self.turn_order.clear();
            self.current_turn = 0;
            return SweepOutcome::Aborted { player: evicted };
        }

        if self.current_turn >= self.turn_order.len() {
            self.current_turn = 0;
        }
        SweepOutcome::Evicted { player: evicted }
    }

    pub fn status(&self) -> RoundStatus {
        let current_turn = self
            .current_player_id()
            .map(|id| self.name_of(id))
            .unwrap_or_default();

        RoundStatus {
            round_active: self.active,
            players: self.players.len(),
            ready: self.ready.len(),
            current_turn,
        }
    }

    /// Names in turn order; empty unless a round is running.
    pub fn turn_order_names(&self) -> Vec<String> {
        if !self.active {
            return Vec::new();
        }
        self.turn_order.iter().map(|id| self.name_of(id)).collect()
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    fn name_of(&self, id: &PlayerId) -> String {
        self.players
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }
}
