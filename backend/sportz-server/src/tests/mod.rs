mod api;
mod store;

use sportz_core::{NewCommentary, NewMatch};

use chrono::{Duration, Utc};

pub(crate) fn new_match(home: &str, away: &str) -> NewMatch {
    let start = Utc::now() - Duration::minutes(30);
    NewMatch {
        sport: "football".to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        start_time: start,
        end_time: start + Duration::minutes(90),
        home_score: None,
        away_score: None,
    }
}

pub(crate) fn new_commentary(minute: i32, text: &str) -> NewCommentary {
    NewCommentary {
        minute,
        sequence: None,
        period: None,
        event_type: None,
        actor: None,
        team: None,
        text: text.to_string(),
        metadata: None,
        tags: Vec::new(),
    }
}
