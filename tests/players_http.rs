mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::app::spawn_test_server;
use common::fixtures::feedback;
use common::http::{assert_close, assert_json_error, assert_status_ok_json, post_json};

#[tokio::test]
async fn it_level_estimate_from_answers() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/level",
        json!({ "shots": ["bandeja", "salida-pared"], "walls": "alto", "objective": "competir" }),
    )
    .await;
    assert_status_ok_json(status, &body);
    // 5.0 + 0.6 + 0.5 + 0.8 + 0.4
    assert_close(&body["data"]["level"], 7.3);
}

#[tokio::test]
async fn it_level_empty_answers_is_baseline() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(&app.app, "/api/players/level", json!({})).await;
    assert_status_ok_json(status, &body);
    assert_close(&body["data"]["level"], 5.0);
    assert!(body["data"]["selfReportedLevel"].is_null());
}

#[tokio::test]
async fn it_level_ignores_mistyped_answers() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/level",
        json!({ "shots": "bandeja", "walls": "alto" }),
    )
    .await;
    assert_status_ok_json(status, &body);
    // scalar shots earn nothing; high walls still adds 0.8
    assert_close(&body["data"]["level"], 5.8);

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/level",
        json!({ "shots": ["bandeja", 3, null], "walls": 7, "objective": ["competir"] }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_close(&body["data"]["level"], 5.6);
}

#[tokio::test]
async fn it_level_rejects_self_report_out_of_range() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/level",
        json!({ "shots": [], "selfReportedLevel": 8.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "LEVEL_OUT_OF_RANGE");

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/level",
        json!({ "selfReportedLevel": 3.5 }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_eq!(body["data"]["selfReportedLevel"], 3.5);
}

#[tokio::test]
async fn it_identity_labels() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/identity",
        json!({ "id": "u1", "shots": ["smash", "bandeja"], "walls": "high" }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_eq!(body["data"]["playerId"], "u1");
    assert_eq!(body["data"]["nickname"], "The Sniper");
    assert_eq!(body["data"]["signatureShot"], "Deep Bandeja");
}

#[tokio::test]
async fn it_insights_from_raw_feedback() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({
            "player": { "id": "u1", "attitude": "tranquilo" },
            "feedback": [
                feedback("u1", 5, 2, 4, 5, 3),
                feedback("u1", 4, 2, 4, 4, 3),
                feedback("someone-else", 1, 1, 1, 1, 1),
            ],
        }),
    )
    .await;
    assert_status_ok_json(status, &body);
    let data = &body["data"];
    assert_eq!(data["count"], 2);
    assert_eq!(data["averages"]["comms"], 4.5);
    assert_eq!(data["averages"]["sportsmanship"], 4.5);
    assert_eq!(data["top2"][0]["category"], "comms");
    assert_eq!(data["top2"][1]["category"], "sportsmanship");
    assert_eq!(data["bottom2"][0]["category"], "positioning");
    assert_eq!(data["bottom2"][0]["label"], "Positioning");
    assert_eq!(data["nickname"], "The Architect");
    assert_eq!(data["signatureShot"], "Consistency");
}

#[tokio::test]
async fn it_insights_prefer_precomputed_aggregate() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({
            "player": { "id": "u1" },
            "feedback": [feedback("u1", 1, 1, 1, 1, 1)],
            "aggregate": { "player_id": "u1", "walls_avg": 4.8, "comms_avg": "3.9", "fb_count": 20 },
        }),
    )
    .await;
    assert_status_ok_json(status, &body);
    let data = &body["data"];
    assert_eq!(data["count"], 20);
    assert_eq!(data["averages"]["walls"], 4.8);
    assert_eq!(data["averages"]["positioning"], 0.0);
    assert_eq!(data["top2"][0]["label"], "Wall Play");
}

#[tokio::test]
async fn it_insights_aggregate_without_count_uses_feedback_rows() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({
            "player": { "id": "u1" },
            "feedback": [feedback("u1", 4, 4, 4, 4, 4), feedback("u1", 2, 2, 2, 2, 2)],
            "aggregate": { "player_id": "u1", "comms_avg": 4.2 },
        }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["averages"]["comms"], 4.2);
}

#[tokio::test]
async fn it_insights_match_padded_player_id() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({
            "player": { "id": " u1 " },
            "feedback": [feedback("u1", 5, 5, 5, 5, 5), feedback("u2", 1, 1, 1, 1, 1)],
        }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_eq!(body["data"]["playerId"], "u1");
    assert_eq!(body["data"]["count"], 1);
    assert_eq!(body["data"]["averages"]["comms"], 5.0);
}

#[tokio::test]
async fn it_insights_without_feedback() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({ "player": { "id": "u9" } }),
    )
    .await;
    assert_status_ok_json(status, &body);
    assert_eq!(body["data"]["count"], 0);
    assert_eq!(body["data"]["averages"], json!({}));
    assert_eq!(body["data"]["top2"], json!([]));
}

#[tokio::test]
async fn it_malformed_body_is_invalid_request() {
    let app = spawn_test_server().await;

    let (status, _, body) = post_json(
        &app.app,
        "/api/players/insights",
        json!({ "feedback": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
}
