use crate::models::{require_non_empty, require_non_negative};
use crate::{CoreError, CoreResult, Match, MatchStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Deserialize;

/// A match that has been requested but not yet stored
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
}

impl NewMatch {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_empty(&self.sport, "sport")?;
        require_non_empty(&self.home_team, "homeTeam")?;
        require_non_empty(&self.away_team, "awayTeam")?;

        if self.end_time <= self.start_time {
            return Err(CoreError::Validation {
                message: "endTime must be chronologically after startTime".to_string(),
                field: Some("endTime".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(score) = self.home_score {
            require_non_negative(score, "homeScore")?;
        }
        if let Some(score) = self.away_score {
            require_non_negative(score, "awayScore")?;
        }

        Ok(())
    }

    /// Build the stored record once the store has assigned an id
    pub fn into_match(self, id: i64, now: DateTime<Utc>) -> Match {
        Match {
            id,
            status: MatchStatus::at(self.start_time, self.end_time, now),
            sport: self.sport.trim().to_string(),
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
            home_score: self.home_score.unwrap_or(0),
            away_score: self.away_score.unwrap_or(0),
            created_at: now,
        }
    }
}
