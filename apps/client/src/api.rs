//! Thin HTTP wrapper over the game server's routes.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}

#[derive(Debug, Deserialize)]
pub struct Joined {
    pub player_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Ready {
    pub status: String,
    pub round_started: bool,
}

#[derive(Debug, Deserialize)]
pub struct GuessReply {
    pub black: u8,
    pub white: u8,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    pub round_active: bool,
    pub players: usize,
    pub ready: usize,
    pub current_turn: String,
}

#[derive(Serialize)]
struct JoinBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ReadyBody<'a> {
    player_id: &'a str,
}

#[derive(Serialize)]
struct GuessBody<'a> {
    player_id: &'a str,
    guess: &'a str,
}

pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn join(&self, name: &str) -> Result<Joined, ApiError> {
        self.post("/join", &JoinBody { name }).await
    }

    pub async fn ready(&self, player_id: &str) -> Result<Ready, ApiError> {
        self.post("/ready", &ReadyBody { player_id }).await
    }

    pub async fn guess(&self, player_id: &str, guess: &str) -> Result<GuessReply, ApiError> {
        self.post("/guess", &GuessBody { player_id, guess }).await
    }

    pub async fn status(&self) -> Result<Status, ApiError> {
        self.get("/status").await
    }

    pub async fn turns(&self) -> Result<Vec<String>, ApiError> {
        self.get("/turns").await
    }

    /// The finished round as raw JSON, printed as-is.
    pub async fn result(&self) -> Result<Value, ApiError> {
        self.get("/result").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        Self::decode(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base);
        debug!(%url, "POST");
        let resp = self.http.post(&url).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let raw = resp.text().await?;
        Err(ApiError::Server {
            status,
            message: error_message(&raw),
        })
    }
}

/// Problem documents carry `detail`; the pending-result reply carries
/// `message`. Anything else is shown verbatim.
fn error_message(raw: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };
    json.get("detail")
        .or_else(|| json.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}
