#![allow(dead_code)]

//! Test infrastructure for sportz-server API tests

use sportz_config::ApiConfig;
use sportz_core::{Commentary, Match};
use sportz_server::{AppState, InMemoryMatchStore};
use sportz_ws::{ConnectionConfig, ConnectionLimits, MatchEventSink, RealtimeHub};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// What the write path handed to the real-time channel
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    MatchCreated(i64),
    CommentaryAdded { match_id: i64, commentary_id: i64 },
}

/// Event sink that remembers every broadcast instead of delivering it
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchEventSink for RecordingSink {
    async fn broadcast_match_created(&self, r#match: &Match) -> usize {
        self.events
            .lock()
            .unwrap()
            .push(RecordedEvent::MatchCreated(r#match.id));
        0
    }

    async fn broadcast_commentary(&self, match_id: i64, commentary: &Commentary) -> usize {
        self.events
            .lock()
            .unwrap()
            .push(RecordedEvent::CommentaryAdded {
                match_id,
                commentary_id: commentary.id,
            });
        0
    }
}

/// AppState backed by a fresh store and a recording sink
pub fn create_test_app_state() -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState {
        store: Arc::new(InMemoryMatchStore::new()),
        events: sink.clone(),
        realtime: RealtimeHub::start(
            ConnectionConfig::default(),
            ConnectionLimits { max_total: 100 },
        ),
        api_config: ApiConfig::default(),
    };
    (state, sink)
}

/// Send a request through the router and decode the JSON body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// A valid create-match payload for a match that is live right now
pub fn match_payload(home: &str, away: &str) -> Value {
    let start = chrono::Utc::now() - chrono::Duration::minutes(10);
    let end = start + chrono::Duration::minutes(90);
    json!({
        "sport": "football",
        "homeTeam": home,
        "awayTeam": away,
        "startTime": start.to_rfc3339(),
        "endTime": end.to_rfc3339(),
    })
}

/// Create a match through the API and return its id
pub async fn create_match(app: &Router, home: &str, away: &str) -> i64 {
    let (status, json) = send(app, "POST", "/matches", Some(match_payload(home, away))).await;
    assert_eq!(status, StatusCode::CREATED);
    json["data"]["id"].as_i64().unwrap()
}
