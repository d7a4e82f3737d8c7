use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque player identity handed out on join.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Refreshed on ready, on guess and when the turn passes to this player.
    #[serde(skip)]
    pub last_active: OffsetDateTime,
}

impl Player {
    pub fn new(name: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            last_active: now,
        }
    }

    pub fn touch(&mut self, now: OffsetDateTime) {
        self.last_active = now;
    }
}
