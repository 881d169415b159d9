use crate::{
    ConnectionId, ConnectionInfo, ConnectionLimits, ConnectionState, Result as WsErrorResult,
    Topic, TopicIndex, TransportHandle, WsError,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::Message;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Registry for tracking active WebSocket connections and their topics
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// Open connections only. `close` removes an entry and tears it down
    /// under one write lock, so Closing and Closed are never stored.
    connections: HashMap<ConnectionId, ConnectionEntry>,
    /// Lives under the same lock so registry and index change together
    topics: TopicIndex,
}

struct ConnectionEntry {
    info: ConnectionInfo,
    transport: TransportHandle,
}

impl RegistryInner {
    fn subscribe(
        &mut self,
        connection_id: ConnectionId,
        topic: Topic,
    ) -> Option<&TransportHandle> {
        let Some(entry) = self.connections.get_mut(&connection_id) else {
            debug!("Ignoring subscribe to {topic} on unknown connection {connection_id}");
            return None;
        };

        if entry.info.subscriptions.subscribe(topic) {
            self.topics.add(topic, connection_id);
            debug!("Connection {connection_id} subscribed to {topic}");
        }
        Some(&entry.transport)
    }

    fn unsubscribe(
        &mut self,
        connection_id: ConnectionId,
        topic: Topic,
    ) -> Option<&TransportHandle> {
        let Some(entry) = self.connections.get_mut(&connection_id) else {
            debug!("Ignoring unsubscribe from {topic} on unknown connection {connection_id}");
            return None;
        };

        if entry.info.subscriptions.unsubscribe(&topic) {
            self.topics.remove(&topic, connection_id);
            debug!("Connection {connection_id} unsubscribed from {topic}");
        }
        Some(&entry.transport)
    }
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
                topics: TopicIndex::new(),
            })),
            limits,
        }
    }

    /// Register a new connection, returns ConnectionId if successful
    pub async fn register(&self, transport: TransportHandle) -> WsErrorResult<ConnectionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        inner.connections.insert(
            connection_id,
            ConnectionEntry {
                info: ConnectionInfo::new(connection_id),
                transport,
            },
        );
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Add a topic to an open connection. Idempotent.
    /// Returns false when the connection is unknown.
    pub async fn subscribe(&self, connection_id: ConnectionId, topic: Topic) -> bool {
        let mut inner = self.inner.write().await;
        inner.subscribe(connection_id, topic).is_some()
    }

    /// `subscribe`, then queue `ack` before releasing the lock, so no event
    /// for `topic` can reach the client ahead of its acknowledgement.
    pub async fn subscribe_with_ack(
        &self,
        connection_id: ConnectionId,
        topic: Topic,
        ack: Message,
    ) -> WsErrorResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.subscribe(connection_id, topic) {
            Some(transport) => {
                transport.sender().try_send(ack).map_err(WsError::from_try_send)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a topic from a connection. Idempotent.
    /// Returns false when the connection is unknown.
    pub async fn unsubscribe(&self, connection_id: ConnectionId, topic: Topic) -> bool {
        let mut inner = self.inner.write().await;
        inner.unsubscribe(connection_id, topic).is_some()
    }

    /// `unsubscribe`, then queue `ack` under the same lock
    pub async fn unsubscribe_with_ack(
        &self,
        connection_id: ConnectionId,
        topic: Topic,
        ack: Message,
    ) -> WsErrorResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.unsubscribe(connection_id, topic) {
            Some(transport) => {
                transport.sender().try_send(ack).map_err(WsError::from_try_send)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Tear a connection down: prune it from every topic, release its
    /// transport and forget it. Idempotent, returns false if it was already gone.
    pub async fn close(&self, connection_id: ConnectionId) -> bool {
        let mut inner = self.inner.write().await;

        let Some(entry) = inner.connections.remove(&connection_id) else {
            return false;
        };
        Self::teardown(&mut inner.topics, entry);

        info!(
            "Closed connection {connection_id} ({} total remaining)",
            inner.connections.len()
        );
        true
    }

    /// Close every connection, returns how many were open
    pub async fn close_all(&self) -> usize {
        let mut inner = self.inner.write().await;

        let entries: Vec<ConnectionEntry> =
            inner.connections.drain().map(|(_, entry)| entry).collect();
        let count = entries.len();
        for entry in entries {
            Self::teardown(&mut inner.topics, entry);
        }

        if count > 0 {
            info!("Closed all {count} connections");
        }
        count
    }

    fn teardown(topics: &mut TopicIndex, entry: ConnectionEntry) {
        let ConnectionEntry {
            mut info,
            transport,
        } = entry;

        info.state = ConnectionState::Closing;
        for topic in info.subscriptions.iter() {
            topics.remove(topic, info.connection_id);
        }
        transport.release();
        info.state = ConnectionState::Closed;

        debug!(
            "Connection {} is {} after {}s",
            info.connection_id,
            info.state,
            (chrono::Utc::now() - info.connected_at).num_seconds()
        );
    }

    /// Snapshot of the subscribers of a topic and their outbound queues.
    /// A recipient closed after the snapshot is safe to send to; the frame
    /// is either dropped with its queue or rejected as closed.
    pub async fn subscribers_of(
        &self,
        topic: &Topic,
    ) -> Vec<(ConnectionId, mpsc::Sender<Message>)> {
        let inner = self.inner.read().await;

        inner
            .topics
            .subscribers_of(topic)
            .into_iter()
            .filter_map(|connection_id| {
                inner
                    .connections
                    .get(&connection_id)
                    .map(|entry| (connection_id, entry.transport.sender().clone()))
            })
            .collect()
    }

    /// `Some(Open)` while registered, None once closed
    pub async fn state_of(&self, connection_id: ConnectionId) -> Option<ConnectionState> {
        let inner = self.inner.read().await;
        inner
            .connections
            .get(&connection_id)
            .map(|entry| entry.info.state)
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner
            .connections
            .get(&connection_id)
            .map(|entry| entry.info.clone())
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    /// Number of topics with at least one subscriber
    pub async fn topic_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.topics.len()
    }

    pub fn limits(&self) -> &ConnectionLimits {
        &self.limits
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
