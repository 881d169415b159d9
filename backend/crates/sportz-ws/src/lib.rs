pub mod broadcaster;
pub mod client_subscriptions;
pub mod codec;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod connection_state;
pub mod domain_event;
pub mod error;
pub mod event_sink;
pub mod handler;
pub mod metrics;
pub mod metrics_timer;
pub mod realtime_hub;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod topic;
pub mod topic_index;
pub mod transport_handle;
pub mod web_socket_connection;

pub use broadcaster::MatchBroadcaster;
pub use client_subscriptions::ClientSubscriptions;
pub use codec::{ControlMessage, MessageCodec, OutboundFrame, ServerMessage};
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use connection_state::ConnectionState;
pub use domain_event::{DomainEvent, topic_of};
pub use error::{Result, WsError};
pub use event_sink::MatchEventSink;
pub use handler::handler;
pub use metrics::Metrics;
pub use metrics_timer::MetricsTimer;
pub use realtime_hub::RealtimeHub;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use topic::Topic;
pub use topic_index::TopicIndex;
pub use transport_handle::TransportHandle;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
