//! Drive the game over HTTP the way a client would.

use std::collections::HashMap;
use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error;
use async_trait::async_trait;
use mastermind::adapters::{PersistedResult, ResultSink};
use mastermind::config::game::GameConfig;
use mastermind::domain::RoundResult;
use mastermind::infra::state::build_state;
use mastermind::state::app_state::AppState;
use mastermind::AppError;
use serde_json::{json, Value};

use crate::common::{get, ok_json, post_json};

/// Sink that keeps results in memory.
#[derive(Default)]
pub struct MemorySink {
    pub results: parking_lot::Mutex<Vec<RoundResult>>,
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn persist(&self, result: &RoundResult) -> Result<PersistedResult, AppError> {
        self.results.lock().push(result.clone());
        Ok(PersistedResult {
            path: "memory".into(),
        })
    }
}

/// Seeded state with an in-memory sink.
pub fn test_state() -> AppState {
    build_state()
        .with_game_config(GameConfig {
            rng_seed: Some(2024),
            ..GameConfig::default()
        })
        .with_result_sink(Arc::new(MemorySink::default()))
        .build()
}

pub async fn join<S>(app: &S, name: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let body: Value = ok_json(post_json(app, "/join", json!({ "name": name })).await).await;
    body["player_id"]
        .as_str()
        .expect("player_id should be a string")
        .to_string()
}

pub async fn ready<S>(app: &S, player_id: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    ok_json(post_json(app, "/ready", json!({ "player_id": player_id })).await).await
}

pub async fn status<S>(app: &S) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    ok_json(get(app, "/status").await).await
}

/// Join everyone and ready them all; returns name -> id.
pub async fn start_round<S>(app: &S, names: &[&str]) -> HashMap<String, String>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mut ids = HashMap::new();
    for name in names {
        ids.insert(name.to_string(), join(app, name).await);
    }
    for name in names {
        ready(app, &ids[*name]).await;
    }
    assert_eq!(status(app).await["round_active"], true);
    ids
}

/// Id of whoever holds the turn right now.
pub async fn holder_id<S>(app: &S, ids: &HashMap<String, String>) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let st = status(app).await;
    let name = st["current_turn"]
        .as_str()
        .expect("current_turn should be a string");
    ids[name].clone()
}

/// Guess `00`, `01`, ... in turn order until somebody cracks the code.
/// Returns the winning reply and the winner's id.
pub async fn play_until_won<S>(app: &S, ids: &HashMap<String, String>) -> (Value, String)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    for n in 0..100 {
        let player_id = holder_id(app, ids).await;
        let guess = format!("{n:02}");
        let reply: Value = ok_json(
            post_json(
                app,
                "/guess",
                json!({ "player_id": player_id, "guess": guess }),
            )
            .await,
        )
        .await;
        if reply["black"] == 2 {
            return (reply, player_id);
        }
    }
    panic!("no guess in 00..=99 matched the secret");
}
