use crate::{ConnectionId, Topic};

use std::collections::{HashMap, HashSet};

/// Topic to subscriber mapping.
///
/// An entry exists only while at least one connection subscribes to it.
#[derive(Debug, Default)]
pub struct TopicIndex {
    topics: HashMap<Topic, HashSet<ConnectionId>>,
}

impl TopicIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the connection was already subscribed
    pub fn add(&mut self, topic: Topic, connection_id: ConnectionId) -> bool {
        self.topics.entry(topic).or_default().insert(connection_id)
    }

    /// Returns false if the connection was not subscribed
    pub fn remove(&mut self, topic: &Topic, connection_id: ConnectionId) -> bool {
        let Some(subscribers) = self.topics.get_mut(topic) else {
            return false;
        };

        let removed = subscribers.remove(&connection_id);
        if subscribers.is_empty() {
            self.topics.remove(topic);
        }
        removed
    }

    /// Owned snapshot of the subscribers, empty for unknown topics
    pub fn subscribers_of(&self, topic: &Topic) -> HashSet<ConnectionId> {
        self.topics.get(topic).cloned().unwrap_or_default()
    }

    pub fn contains(&self, topic: &Topic) -> bool {
        self.topics.contains_key(topic)
    }

    /// Number of topics with at least one subscriber
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
