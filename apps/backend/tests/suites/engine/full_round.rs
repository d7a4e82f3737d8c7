use std::sync::Arc;

use mastermind::config::game::GameConfig;
use mastermind::infra::state::build_state;
use serde_json::Value;

use crate::common::{get, ok_json};
use crate::support::app_builder::create_test_app;
use crate::support::game::{
    join, play_until_won, ready, start_round, status, test_state, MemorySink,
};

#[actix_web::test]
async fn round_is_played_to_a_win() {
    let sink = Arc::new(MemorySink::default());
    let state = build_state()
        .with_game_config(GameConfig {
            rng_seed: Some(11),
            ..GameConfig::default()
        })
        .with_result_sink(sink.clone())
        .build();
    let app = create_test_app(state).with_prod_routes().build().await;
    let ids = start_round(&app, &["alice", "bob", "carol"]).await;
    let order: Vec<String> = ok_json(get(&app, "/turns").await).await;

    let (reply, winner_id) = play_until_won(&app, &ids).await;
    let winner_name = ids
        .iter()
        .find(|(_, id)| **id == winner_id)
        .map(|(name, _)| name.clone())
        .unwrap();
    assert_eq!(reply["white"], 0);
    assert_eq!(
        reply["message"],
        format!("Player {winner_name} guessed the code!")
    );

    let st = status(&app).await;
    assert_eq!(st["round_active"], false);
    assert_eq!(st["ready"], 0);
    assert_eq!(st["players"], 3);
    assert_eq!(st["current_turn"], "");
    let turns: Vec<String> = ok_json(get(&app, "/turns").await).await;
    assert!(turns.is_empty());

    let result: Value = ok_json(get(&app, "/result").await).await;
    assert_eq!(result["winner_id"], winner_id.as_str());
    assert_eq!(result["winner_name"], winner_name.as_str());
    let code = result["code"].as_array().unwrap();
    assert_eq!(code.len(), 2);
    assert!(result["start"].as_str().is_some());
    assert!(result["end"].as_str().is_some());

    // Attempts follow turn order and add up to the guesses made.
    let attempts = result["attempts"].as_array().unwrap();
    let listed: Vec<&str> = attempts
        .iter()
        .map(|a| a["player_name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = order
        .iter()
        .map(String::as_str)
        .filter(|n| listed.contains(n))
        .collect();
    assert_eq!(listed, expected);
    let total: u64 = attempts.iter().map(|a| a["count"].as_u64().unwrap()).sum();
    let secret = code[0].as_u64().unwrap() * 10 + code[1].as_u64().unwrap();
    assert_eq!(total, secret + 1);

    // The sink runs on a spawned task.
    for _ in 0..50 {
        if !sink.results.lock().is_empty() {
            break;
        }
        actix_web::rt::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    let persisted = sink.results.lock().clone();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].winner_id.as_str(), winner_id);
}

#[actix_web::test]
async fn next_round_can_start_with_same_players() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let ids = start_round(&app, &["alice", "bob"]).await;
    play_until_won(&app, &ids).await;
    let first: Value = ok_json(get(&app, "/result").await).await;

    // Joining is allowed again, and readying everyone starts a new round.
    let carol = join(&app, "carol").await;
    for id in ids.values() {
        ready(&app, id).await;
    }
    let body = ready(&app, &carol).await;
    assert_eq!(body["round_started"], true);

    // A new round clears the previous result.
    let resp = get(&app, "/result").await;
    assert_eq!(resp.status().as_u16(), 404);
    assert!(first["winner_id"].is_string());
}
