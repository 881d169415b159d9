#![allow(dead_code)]

use sportz_ws::{ServerMessage, Topic};

use axum_test::{TestServer, TestWebSocket, WsMessage};
use serde_json::json;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to `/ws` and consume the welcome frame
    pub async fn connect(server: &TestServer) -> Self {
        let mut ws = server.get_websocket("/ws").await.into_websocket().await;

        let welcome: ServerMessage = ws.receive_json().await;
        assert_eq!(welcome, ServerMessage::Welcome);

        Self { ws }
    }

    /// Subscribe and wait for the acknowledgement, so the subscription is live
    pub async fn subscribe(&mut self, match_id: serde_json::Value) -> Topic {
        self.ws
            .send_json(&json!({"type": "subscribe", "matchId": match_id}))
            .await;
        match self.receive().await {
            ServerMessage::Subscribed { topic } => topic,
            other => panic!("expected subscribed ack, got {other:?}"),
        }
    }

    /// Unsubscribe and wait for the acknowledgement
    pub async fn unsubscribe(&mut self, match_id: serde_json::Value) -> Topic {
        self.ws
            .send_json(&json!({"type": "unsubscribe", "matchId": match_id}))
            .await;
        match self.receive().await {
            ServerMessage::Unsubscribed { topic } => topic,
            other => panic!("expected unsubscribed ack, got {other:?}"),
        }
    }

    /// Send raw text (for protocol error tests)
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Receive the next server frame
    pub async fn receive(&mut self) -> ServerMessage {
        self.ws.receive_json().await
    }

    /// Receive the next raw frame (close frames included)
    pub async fn receive_message(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect several clients (helper for fan-out tests)
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
