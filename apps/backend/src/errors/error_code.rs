//! Error codes for the Mastermind backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Mastermind backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lobby
    /// A round is running; joins are closed
    RoundInProgress,
    /// The lobby already holds the maximum number of players
    LobbyFull,
    /// Another active player uses the same display name
    DuplicateName,
    /// Player already marked ready for the next round
    AlreadyReady,

    // Turns and guesses
    /// No round is currently active
    NoActiveRound,
    /// Round is active but nobody is in the turn order
    EmptyTurnOrder,
    /// Guess submitted out of turn
    NotYourTurn,
    /// Guess is not two decimal digits
    InvalidGuess,

    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
            Self::LobbyFull => "LOBBY_FULL",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::AlreadyReady => "ALREADY_READY",

            Self::NoActiveRound => "NO_ACTIVE_ROUND",
            Self::EmptyTurnOrder => "EMPTY_TURN_ORDER",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InvalidGuess => "INVALID_GUESS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
