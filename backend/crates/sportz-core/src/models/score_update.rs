use crate::CoreResult;
use crate::models::require_non_negative;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub home_score: i32,
    pub away_score: i32,
}

impl ScoreUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_negative(self.home_score, "homeScore")?;
        require_non_negative(self.away_score, "awayScore")
    }
}
