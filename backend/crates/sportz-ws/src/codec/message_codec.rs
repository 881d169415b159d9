use crate::{
    ControlMessage, DomainEvent, OutboundFrame, Result as WsErrorResult, ServerMessage, WsError,
};

use sportz_core::{Commentary, Match};

use serde::Serialize;

/// Borrowing view of an event frame, so encoding never clones the record
#[derive(Serialize)]
#[serde(tag = "type")]
enum EventFrame<'a> {
    #[serde(rename = "match.created")]
    MatchCreated { data: &'a Match },
    #[serde(rename = "commentary.created")]
    CommentaryCreated { data: &'a Commentary },
}

/// Pure JSON codec for the real-time protocol
pub struct MessageCodec;

impl MessageCodec {
    /// Encode a domain event once for the whole fan-out
    pub fn encode(event: &DomainEvent) -> WsErrorResult<OutboundFrame> {
        let frame = match event {
            DomainEvent::MatchCreated { r#match } => EventFrame::MatchCreated { data: r#match },
            DomainEvent::CommentaryAdded { commentary, .. } => {
                EventFrame::CommentaryCreated { data: commentary }
            }
        };

        let payload = serde_json::to_string(&frame).map_err(WsError::encode)?;
        Ok(OutboundFrame::new(payload, event.message_type()))
    }

    /// Encode a control reply (welcome, acks, errors)
    pub fn encode_server(message: &ServerMessage) -> WsErrorResult<OutboundFrame> {
        let payload = serde_json::to_string(message).map_err(WsError::encode)?;
        Ok(OutboundFrame::new(payload, message.message_type()))
    }

    /// Decode an inbound text frame
    pub fn decode(text: &str) -> WsErrorResult<ControlMessage> {
        serde_json::from_str(text).map_err(WsError::decode)
    }
}
