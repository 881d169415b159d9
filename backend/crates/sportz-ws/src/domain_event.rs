use crate::Topic;

use sportz_core::{Commentary, Match};

/// A persisted write the real-time channel fans out
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    MatchCreated { r#match: Match },
    CommentaryAdded { match_id: i64, commentary: Commentary },
}

impl DomainEvent {
    /// Wire `type` of the event frame
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::MatchCreated { .. } => "match.created",
            Self::CommentaryAdded { .. } => "commentary.created",
        }
    }
}

/// New matches go to the "all matches" topic, commentary to its match's topic
pub fn topic_of(event: &DomainEvent) -> Topic {
    match event {
        DomainEvent::MatchCreated { .. } => Topic::AllMatches,
        DomainEvent::CommentaryAdded { match_id, .. } => Topic::Match(*match_id),
    }
}
