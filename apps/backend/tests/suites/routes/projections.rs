use serde_json::{json, Value};

use crate::common::{get, ok_json};
use crate::support::app_builder::create_test_app;
use crate::support::game::{join, start_round, test_state};

#[actix_web::test]
async fn empty_lobby_status() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let body: Value = ok_json(get(&app, "/status").await).await;
    assert_eq!(
        body,
        json!({"round_active": false, "players": 0, "ready": 0, "current_turn": ""})
    );
}

#[actix_web::test]
async fn turn_order_is_empty_before_start() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    join(&app, "alice").await;

    let order: Vec<String> = ok_json(get(&app, "/turns").await).await;
    assert!(order.is_empty());
}

#[actix_web::test]
async fn turn_order_is_a_permutation_of_players() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    start_round(&app, &["alice", "bob", "carol", "dave"]).await;

    let mut order: Vec<String> = ok_json(get(&app, "/turns").await).await;
    let status: Value = ok_json(get(&app, "/status").await).await;
    assert_eq!(status["current_turn"], order[0]);

    order.sort();
    assert_eq!(order, vec!["alice", "bob", "carol", "dave"]);
}

#[actix_web::test]
async fn result_is_pending_before_any_win() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    start_round(&app, &["alice", "bob"]).await;

    let resp = get(&app, "/result").await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "game is not finished yet"}));
}
