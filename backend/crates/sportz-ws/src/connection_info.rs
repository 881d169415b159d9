use crate::{ClientSubscriptions, ConnectionId, ConnectionState};

use chrono::{DateTime, Utc};

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    pub state: ConnectionState,
    pub subscriptions: ClientSubscriptions,
}

impl ConnectionInfo {
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            connected_at: Utc::now(),
            state: ConnectionState::Open,
            subscriptions: ClientSubscriptions::new(),
        }
    }
}
