use crate::Topic;

use serde::{Deserialize, Serialize};

/// Frames a client may send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlMessage {
    Subscribe {
        #[serde(rename = "matchId")]
        topic: Topic,
    },
    Unsubscribe {
        #[serde(rename = "matchId")]
        topic: Topic,
    },
}

impl ControlMessage {
    pub fn topic(&self) -> Topic {
        match self {
            Self::Subscribe { topic } | Self::Unsubscribe { topic } => *topic,
        }
    }

    pub fn message_type(&self) -> &'static str {
        match self {
            Self::Subscribe { .. } => "subscribe",
            Self::Unsubscribe { .. } => "unsubscribe",
        }
    }
}
