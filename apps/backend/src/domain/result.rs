//! Summary of a finished round, as served by `GET /result` and written by
//! the result sink.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::code::Code;
use super::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCount {
    pub player_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
    pub code: Code,
    /// Listed in the finished round's turn order.
    pub attempts: Vec<AttemptCount>,
    pub winner_id: PlayerId,
    pub winner_name: String,
}

impl RoundResult {
    pub fn attempts_of(&self, player_name: &str) -> Option<u32> {
        self.attempts
            .iter()
            .find(|a| a.player_name == player_name)
            .map(|a| a.count)
    }
}
