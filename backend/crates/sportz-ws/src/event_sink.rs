use crate::{DomainEvent, MatchBroadcaster};

use sportz_core::{Commentary, Match};

use async_trait::async_trait;

/// The write path's only view of the real-time channel.
///
/// Callers invoke it after a record is persisted. Delivery is
/// fire-and-forget; the returned recipient count is informational.
#[async_trait]
pub trait MatchEventSink: Send + Sync {
    async fn broadcast_match_created(&self, r#match: &Match) -> usize;

    async fn broadcast_commentary(&self, match_id: i64, commentary: &Commentary) -> usize;
}

#[async_trait]
impl MatchEventSink for MatchBroadcaster {
    async fn broadcast_match_created(&self, r#match: &Match) -> usize {
        self.dispatch(&DomainEvent::MatchCreated {
            r#match: r#match.clone(),
        })
        .await
    }

    async fn broadcast_commentary(&self, match_id: i64, commentary: &Commentary) -> usize {
        self.dispatch(&DomainEvent::CommentaryAdded {
            match_id,
            commentary: commentary.clone(),
        })
        .await
    }
}
