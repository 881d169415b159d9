use crate::{MatchStore, StoreError, StoreResult};

use sportz_core::{Commentary, Match, NewCommentary, NewMatch, ScoreUpdate};

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;

/// Process-local store. Ids are sequential from 1, so id order is creation order.
pub struct InMemoryMatchStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    matches: BTreeMap<i64, Match>,
    /// Commentary per match, in insertion order
    commentary: HashMap<i64, Vec<Commentary>>,
    last_match_id: i64,
    last_commentary_id: i64,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }
}

impl Default for InMemoryMatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryMatchStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn insert_match(&self, new_match: NewMatch) -> StoreResult<Match> {
        let mut inner = self.inner.write().await;

        inner.last_match_id += 1;
        let record = new_match.into_match(inner.last_match_id, Utc::now());
        inner.matches.insert(record.id, record.clone());

        debug!("Stored match {} ({} total)", record.id, inner.matches.len());
        Ok(record)
    }

    async fn list_matches(&self, limit: usize) -> StoreResult<Vec<Match>> {
        let inner = self.inner.read().await;
        Ok(inner.matches.values().rev().take(limit).cloned().collect())
    }

    async fn find_match(&self, match_id: i64) -> StoreResult<Option<Match>> {
        let inner = self.inner.read().await;
        Ok(inner.matches.get(&match_id).cloned())
    }

    async fn update_score(
        &self,
        match_id: i64,
        score: ScoreUpdate,
    ) -> StoreResult<Option<Match>> {
        let mut inner = self.inner.write().await;

        Ok(inner.matches.get_mut(&match_id).map(|record| {
            record.home_score = score.home_score;
            record.away_score = score.away_score;
            record.clone()
        }))
    }

    async fn insert_commentary(
        &self,
        match_id: i64,
        new_commentary: NewCommentary,
    ) -> StoreResult<Commentary> {
        let mut inner = self.inner.write().await;

        if !inner.matches.contains_key(&match_id) {
            return Err(StoreError::match_not_found(match_id));
        }

        inner.last_commentary_id += 1;
        let entry = new_commentary.into_commentary(inner.last_commentary_id, match_id, Utc::now());
        inner
            .commentary
            .entry(match_id)
            .or_default()
            .push(entry.clone());

        debug!("Stored commentary {} for match {match_id}", entry.id);
        Ok(entry)
    }

    async fn list_commentary(&self, match_id: i64, limit: usize) -> StoreResult<Vec<Commentary>> {
        let inner = self.inner.read().await;
        Ok(inner
            .commentary
            .get(&match_id)
            .map(|entries| entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
