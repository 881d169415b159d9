use crate::Topic;

use sportz_core::{Commentary, Match};

use serde::{Deserialize, Serialize};

/// Every frame the server emits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "welcome")]
    Welcome,
    #[serde(rename = "subscribed")]
    Subscribed {
        #[serde(rename = "matchId")]
        topic: Topic,
    },
    #[serde(rename = "unsubscribed")]
    Unsubscribed {
        #[serde(rename = "matchId")]
        topic: Topic,
    },
    #[serde(rename = "match.created")]
    MatchCreated { data: Match },
    #[serde(rename = "commentary.created")]
    CommentaryCreated { data: Commentary },
    #[serde(rename = "error")]
    Error { code: String, message: String },
}

impl ServerMessage {
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Subscribed { .. } => "subscribed",
            Self::Unsubscribed { .. } => "unsubscribed",
            Self::MatchCreated { .. } => "match.created",
            Self::CommentaryCreated { .. } => "commentary.created",
            Self::Error { .. } => "error",
        }
    }
}
