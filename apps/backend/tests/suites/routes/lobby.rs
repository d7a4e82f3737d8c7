use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};

use crate::common::{ok_json, post_json};
use crate::support::app_builder::create_test_app;
use crate::support::game::{join, ready, status, test_state};

#[actix_web::test]
async fn join_returns_fresh_id_and_name() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let body: Value = ok_json(post_json(&app, "/join", json!({"name": "alice"})).await).await;
    assert_eq!(body["name"], "alice");
    let id = body["player_id"].as_str().unwrap();
    assert!(!id.is_empty());

    let other = join(&app, "bob").await;
    assert_ne!(other, id);

    let st = status(&app).await;
    assert_eq!(st["players"], 2);
    assert_eq!(st["ready"], 0);
    assert_eq!(st["round_active"], false);
}

#[actix_web::test]
async fn duplicate_name_is_conflict() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    join(&app, "alice").await;

    let resp = post_json(&app, "/join", json!({"name": "alice"})).await;
    let problem = assert_problem_details(resp, "DUPLICATE_NAME", StatusCode::CONFLICT).await;
    assert!(problem.detail.contains("alice"));
}

#[actix_web::test]
async fn fifth_player_is_refused() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    for name in ["a", "b", "c", "d"] {
        join(&app, name).await;
    }

    let resp = post_json(&app, "/join", json!({"name": "e"})).await;
    let problem = assert_problem_details(resp, "LOBBY_FULL", StatusCode::CONFLICT).await;
    assert_eq!(problem.detail, "maximum 4 players allowed");
    assert_eq!(status(&app).await["players"], 4);
}

#[actix_web::test]
async fn join_during_round_is_refused() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let a = join(&app, "alice").await;
    let b = join(&app, "bob").await;
    ready(&app, &a).await;
    ready(&app, &b).await;

    let resp = post_json(&app, "/join", json!({"name": "carol"})).await;
    let problem = assert_problem_details(resp, "ROUND_IN_PROGRESS", StatusCode::CONFLICT).await;
    assert_eq!(problem.detail, "game in progress; cannot join");
}

#[actix_web::test]
async fn ready_messages_and_round_start() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let a = join(&app, "alice").await;
    let b = join(&app, "bob").await;

    let first = ready(&app, &a).await;
    assert_eq!(first["status"], "marked as ready");
    assert_eq!(first["round_started"], false);

    let second = ready(&app, &b).await;
    assert_eq!(second["status"], "marked as ready and game starts!");
    assert_eq!(second["round_started"], true);

    let st = status(&app).await;
    assert_eq!(st["round_active"], true);
    let current = st["current_turn"].as_str().unwrap();
    assert!(current == "alice" || current == "bob");
}

#[actix_web::test]
async fn lone_ready_player_does_not_start() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let a = join(&app, "alice").await;

    let body = ready(&app, &a).await;
    assert_eq!(body["round_started"], false);
    assert_eq!(status(&app).await["round_active"], false);
}

#[actix_web::test]
async fn ready_errors() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let a = join(&app, "alice").await;
    join(&app, "bob").await;
    ready(&app, &a).await;

    let resp = post_json(&app, "/ready", json!({"player_id": a})).await;
    assert_problem_details(resp, "ALREADY_READY", StatusCode::CONFLICT).await;

    let resp = post_json(&app, "/ready", json!({"player_id": "nobody"})).await;
    let problem = assert_problem_details(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND).await;
    assert_eq!(problem.detail, "player not found");
}
