use crate::MatchStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub status: MatchStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,

    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Re-derive the status from the match window
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = MatchStatus::at(self.start_time, self.end_time, now);
    }
}
