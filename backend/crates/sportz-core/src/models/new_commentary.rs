use crate::models::{require_non_empty, require_non_negative};
use crate::{Commentary, CoreResult};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Commentary posted against a match, before it is stored
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentary {
    #[serde(alias = "minutes")]
    pub minute: i32,
    #[serde(default)]
    pub sequence: Option<i32>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    pub text: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewCommentary {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_negative(self.minute, "minute")?;
        require_non_empty(&self.text, "text")
    }

    pub fn into_commentary(self, id: i64, match_id: i64, now: DateTime<Utc>) -> Commentary {
        Commentary {
            id,
            match_id,
            minute: self.minute,
            sequence: self.sequence,
            period: self.period,
            event_type: self.event_type,
            actor: self.actor,
            team: self.team,
            text: self.text.trim().to_string(),
            metadata: self.metadata,
            tags: self.tags,
            created_at: now,
        }
    }
}
