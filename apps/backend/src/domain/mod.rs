//! Domain layer: the code-breaking rules and the round state machine.

pub mod code;
pub mod pegs;
pub mod player;
pub mod result;
pub mod round;

#[cfg(test)]
mod tests_idle;

// Re-exports for ergonomics
pub use code::{Code, CODE_LENGTH};
pub use pegs::{evaluate, Pegs};
pub use player::{Player, PlayerId};
pub use result::{AttemptCount, RoundResult};
pub use round::{GuessOutcome, Round, RoundStatus, SweepOutcome, MAX_PLAYERS, MIN_PLAYERS};
