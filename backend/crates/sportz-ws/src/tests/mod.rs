
use crate::{ConnectionId, ConnectionLimits, ConnectionRegistry, TransportHandle};

use sportz_core::{Commentary, Match, MatchStatus};

use std::sync::Arc;

use axum::extract::ws::Message;
use chrono::{TimeZone, Utc};
use tokio::sync::{Notify, mpsc};

/// A registered connection as the tests see it: its id, the receiving end of
/// its outbound queue and its close signal
pub(crate) struct TestConnection {
    pub id: ConnectionId,
    pub rx: mpsc::Receiver<Message>,
    pub closed: Arc<Notify>,
}

impl TestConnection {
    /// Next queued text frame parsed as JSON, None if the queue is empty
    pub fn next_json(&mut self) -> Option<serde_json::Value> {
        match self.rx.try_recv().ok()? {
            Message::Text(text) => serde_json::from_str(text.as_str()).ok(),
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}

pub(crate) fn registry() -> ConnectionRegistry {
    ConnectionRegistry::new(ConnectionLimits { max_total: 100 })
}

pub(crate) async fn connect(registry: &ConnectionRegistry, capacity: usize) -> TestConnection {
    let (tx, rx) = mpsc::channel(capacity);
    let closed = Arc::new(Notify::new());
    let id = registry
        .register(TransportHandle::new(tx, Arc::clone(&closed)))
        .await
        .unwrap();
    TestConnection { id, rx, closed }
}

pub(crate) fn sample_match(id: i64) -> Match {
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap();
    Match {
        id,
        sport: String::from("football"),
        home_team: String::from("Arsenal"),
        away_team: String::from("Chelsea"),
        status: MatchStatus::Live,
        start_time: start,
        end_time: start + chrono::Duration::minutes(105),
        home_score: 0,
        away_score: 0,
        created_at: start,
    }
}

pub(crate) fn sample_commentary(id: i64, match_id: i64, minute: i32) -> Commentary {
    Commentary {
        id,
        match_id,
        minute,
        sequence: None,
        period: Some(String::from("1H")),
        event_type: Some(String::from("goal")),
        actor: None,
        team: None,
        text: format!("Minute {minute} update"),
        metadata: None,
        tags: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap(),
    }
}
