//! Integration tests for match API handlers

mod common;

use crate::common::{RecordedEvent, create_match, create_test_app_state, match_payload, send};

use sportz_server::build_router;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn given_root_when_requested_then_welcome_message() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Welcome to Sportz API!");
}

#[tokio::test]
async fn given_valid_payload_when_match_created_then_201_and_broadcast() {
    let (state, sink) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "POST", "/matches", Some(match_payload("Arsenal", "Chelsea"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["homeTeam"], "Arsenal");
    assert_eq!(json["data"]["awayTeam"], "Chelsea");
    assert_eq!(json["data"]["homeScore"], 0);
    assert_eq!(json["data"]["status"], "live");
    assert_eq!(sink.events(), vec![RecordedEvent::MatchCreated(1)]);
}

#[tokio::test]
async fn given_end_before_start_when_match_created_then_400_and_no_broadcast() {
    let (state, sink) = create_test_app_state();
    let app = build_router(state);

    let payload = json!({
        "sport": "football",
        "homeTeam": "A",
        "awayTeam": "B",
        "startTime": "2026-05-01T15:00:00Z",
        "endTime": "2026-05-01T14:00:00Z",
    });
    let (status, json) = send(&app, "POST", "/matches", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "endTime");
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn given_malformed_body_when_match_created_then_400_and_no_broadcast() {
    let (state, sink) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "POST", "/matches", Some(json!({ "sport": "football" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn given_three_matches_when_listed_with_limit_then_newest_first() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);
    create_match(&app, "A", "B").await;
    create_match(&app, "C", "D").await;
    create_match(&app, "E", "F").await;

    let (status, json) = send(&app, "GET", "/matches?limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], 3);
    assert_eq!(data[1]["id"], 2);
}

#[tokio::test]
async fn given_invalid_limit_when_listed_then_400() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (zero, _) = send(&app, "GET", "/matches?limit=0", None).await;
    let (text, _) = send(&app, "GET", "/matches?limit=abc", None).await;
    let (above_max, json) = send(&app, "GET", "/matches?limit=150", None).await;

    assert_eq!(zero, StatusCode::BAD_REQUEST);
    assert_eq!(text, StatusCode::BAD_REQUEST);
    assert_eq!(above_max, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "limit");
}

#[tokio::test]
async fn given_limit_at_max_when_listed_then_200() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);
    create_match(&app, "A", "B").await;

    let (status, json) = send(&app, "GET", "/matches?limit=100", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn given_unknown_id_when_fetched_then_404() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "GET", "/matches/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_non_numeric_id_when_fetched_then_400() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "GET", "/matches/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn given_existing_match_when_score_updated_then_200_without_broadcast() {
    let (state, sink) = create_test_app_state();
    let app = build_router(state);
    let id = create_match(&app, "A", "B").await;

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/matches/{id}/score"),
        Some(json!({ "homeScore": 2, "awayScore": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["homeScore"], 2);
    assert_eq!(json["data"]["awayScore"], 1);
    assert_eq!(sink.events(), vec![RecordedEvent::MatchCreated(id)]);
}

#[tokio::test]
async fn given_negative_score_when_updated_then_400() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);
    let id = create_match(&app, "A", "B").await;

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/matches/{id}/score"),
        Some(json!({ "homeScore": -1, "awayScore": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "homeScore");
}

#[tokio::test]
async fn given_unknown_match_when_score_updated_then_404() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (status, _) = send(
        &app,
        "PATCH",
        "/matches/77/score",
        Some(json!({ "homeScore": 1, "awayScore": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_running_hub_when_health_checked_then_reports_connections() {
    let (state, _) = create_test_app_state();
    let app = build_router(state);

    let (status, json) = send(&app, "GET", "/health", None).await;
    let (ready, _) = send(&app, "GET", "/ready", None).await;
    let (live, _) = send(&app, "GET", "/live", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["connections"], 0);
    assert_eq!(ready, StatusCode::OK);
    assert_eq!(live, StatusCode::OK);
}

#[tokio::test]
async fn given_stopped_hub_when_readiness_checked_then_not_ready() {
    let (state, _) = create_test_app_state();
    state.realtime.stop().await;
    let app = build_router(state);

    let (ready, _) = send(&app, "GET", "/ready", None).await;

    assert_eq!(ready, StatusCode::SERVICE_UNAVAILABLE);
}
