use axum::extract::ws::{Message, Utf8Bytes};

/// Encoded text frame, shared by every recipient of one broadcast
#[derive(Debug, Clone)]
pub struct OutboundFrame {
    pub payload: Utf8Bytes,
    pub message_type: &'static str,
}

impl OutboundFrame {
    pub fn new(payload: String, message_type: &'static str) -> Self {
        Self {
            payload: Utf8Bytes::from(payload),
            message_type,
        }
    }

    /// Cheap: clones a reference-counted buffer
    pub fn to_message(&self) -> Message {
        Message::Text(self.payload.clone())
    }
}
