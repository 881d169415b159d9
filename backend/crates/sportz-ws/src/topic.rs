use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire key for the "every match" topic
pub const ALL_MATCHES_KEY: &str = "all";

/// Routing key for real-time events.
///
/// On the wire a topic is either a positive integer match id, the same id
/// as a numeric string, or the reserved string `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    AllMatches,
    Match(i64),
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllMatches => f.write_str(ALL_MATCHES_KEY),
            Self::Match(id) => write!(f, "{id}"),
        }
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::AllMatches => serializer.serialize_str(ALL_MATCHES_KEY),
            Self::Match(id) => serializer.serialize_i64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TopicVisitor)
    }
}

struct TopicVisitor;

impl TopicVisitor {
    fn positive<E: de::Error>(id: i64) -> Result<Topic, E> {
        if id > 0 {
            Ok(Topic::Match(id))
        } else {
            Err(E::custom(format!(
                "matchId must be a positive integer, got {id}"
            )))
        }
    }
}

impl<'de> Visitor<'de> for TopicVisitor {
    type Value = Topic;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive match id or \"all\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Topic, E> {
        Self::positive(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Topic, E> {
        let id = i64::try_from(value)
            .map_err(|_| E::custom(format!("matchId out of range: {value}")))?;
        Self::positive(id)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Topic, E> {
        let value = value.trim();
        if value == ALL_MATCHES_KEY {
            return Ok(Topic::AllMatches);
        }

        let id = value
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))?;
        Self::positive(id)
    }
}
