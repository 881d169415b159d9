use crate::{ApiError, StoreError};

use sportz_core::ScoreUpdate;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    let (status, json) = body_json(ApiError::match_not_found(7)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Match 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_400_with_field() {
    let core_error = ScoreUpdate {
        home_score: -1,
        away_score: 0,
    }
    .validate()
    .unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "homeScore");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_details_are_hidden() {
    let error = ApiError::Internal {
        message: "lock poisoned at shard 3".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("shard"));
}

#[tokio::test]
async fn given_bad_request_when_rendered_then_400() {
    let error = ApiError::BadRequest {
        message: "Invalid payload".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn given_store_match_not_found_when_converted_then_not_found() {
    let error = ApiError::from(StoreError::match_not_found(12));

    assert!(matches!(error, ApiError::NotFound { .. }));
    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}
