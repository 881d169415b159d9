use crate::Topic;

use std::collections::HashSet;

/// Tracks which topics a client has subscribed to
#[derive(Debug, Clone, Default)]
pub struct ClientSubscriptions {
    topics: HashSet<Topic>,
}

impl ClientSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a topic, returns false if already subscribed
    pub fn subscribe(&mut self, topic: Topic) -> bool {
        self.topics.insert(topic)
    }

    /// Unsubscribe from a topic, returns false if it was not subscribed
    pub fn unsubscribe(&mut self, topic: &Topic) -> bool {
        self.topics.remove(topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }
}
