#![allow(dead_code)]

use sportz_core::{Commentary, Match, MatchStatus};

use chrono::{TimeZone, Utc};

pub fn sample_match(id: i64) -> Match {
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap();
    Match {
        id,
        sport: String::from("football"),
        home_team: String::from("Arsenal"),
        away_team: String::from("Chelsea"),
        status: MatchStatus::Scheduled,
        start_time: start,
        end_time: start + chrono::Duration::minutes(105),
        home_score: 0,
        away_score: 0,
        created_at: start,
    }
}

pub fn sample_commentary(id: i64, match_id: i64, minute: i32) -> Commentary {
    Commentary {
        id,
        match_id,
        minute,
        sequence: Some(minute),
        period: None,
        event_type: None,
        actor: None,
        team: None,
        text: format!("Minute {minute}"),
        metadata: None,
        tags: vec![String::from("live")],
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap(),
    }
}
