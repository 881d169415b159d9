use crate::StoreResult;

use sportz_core::{Commentary, Match, NewCommentary, NewMatch, ScoreUpdate};

use async_trait::async_trait;

/// Persistence for matches and their commentary.
///
/// Inputs are validated by the caller. Lists are newest first.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Assigns the id and creation time
    async fn insert_match(&self, new_match: NewMatch) -> StoreResult<Match>;

    async fn list_matches(&self, limit: usize) -> StoreResult<Vec<Match>>;

    async fn find_match(&self, match_id: i64) -> StoreResult<Option<Match>>;

    /// None when the match does not exist
    async fn update_score(&self, match_id: i64, score: ScoreUpdate)
    -> StoreResult<Option<Match>>;

    /// Fails with `MatchNotFound` for an unknown match
    async fn insert_commentary(
        &self,
        match_id: i64,
        new_commentary: NewCommentary,
    ) -> StoreResult<Commentary>;

    async fn list_commentary(&self, match_id: i64, limit: usize) -> StoreResult<Vec<Commentary>>;
}
