//! Domain-level error type returned by the round engine.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use thiserror::Error;

use super::ErrorCode;

/// Every failure the round engine can report. All of them are
/// caller-correctable; none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("game in progress; cannot join")]
    RoundInProgress,
    #[error("maximum {max} players allowed")]
    LobbyFull { max: usize },
    #[error("player with name '{0}' already exists")]
    DuplicateName(String),
    #[error("player not found")]
    PlayerNotFound,
    #[error("player already marked as ready")]
    AlreadyReady,
    #[error("no active round")]
    NoActiveRound,
    #[error("no players in turn order")]
    EmptyTurnOrder,
    #[error("not your turn")]
    NotYourTurn,
    #[error("invalid guess: {0}")]
    InvalidGuess(String),
}

impl DomainError {
    pub fn invalid_guess(detail: impl Into<String>) -> Self {
        Self::InvalidGuess(detail.into())
    }

    /// Stable machine-readable kind for this failure.
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::RoundInProgress => ErrorCode::RoundInProgress,
            DomainError::LobbyFull { .. } => ErrorCode::LobbyFull,
            DomainError::DuplicateName(_) => ErrorCode::DuplicateName,
            DomainError::PlayerNotFound => ErrorCode::PlayerNotFound,
            DomainError::AlreadyReady => ErrorCode::AlreadyReady,
            DomainError::NoActiveRound => ErrorCode::NoActiveRound,
            DomainError::EmptyTurnOrder => ErrorCode::EmptyTurnOrder,
            DomainError::NotYourTurn => ErrorCode::NotYourTurn,
            DomainError::InvalidGuess(_) => ErrorCode::InvalidGuess,
        }
    }
}
