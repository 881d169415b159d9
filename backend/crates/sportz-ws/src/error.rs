use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Control message decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Event encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Heartbeat timeout after {timeout_secs}s {location}")]
    HeartbeatTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },
}

impl WsError {
    #[track_caller]
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A rejected `try_send` on a connection's outbound queue
    #[track_caller]
    pub fn from_try_send<T>(error: mpsc::error::TrySendError<T>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            mpsc::error::TrySendError::Full(_) => Self::SendBufferFull { location },
            mpsc::error::TrySendError::Closed(_) => Self::ConnectionClosed {
                reason: String::from("outbound queue closed"),
                location,
            },
        }
    }

    #[track_caller]
    pub fn invalid_message<S: Into<String>>(message: S) -> Self {
        Self::InvalidMessage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code sent to clients in `error` frames
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Encode { .. } => "ENCODE_ERROR",
            Self::SendBufferFull { .. } => "SLOW_CLIENT",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::InvalidMessage { .. } => "INVALID_MESSAGE",
            Self::HeartbeatTimeout { .. } => "HEARTBEAT_TIMEOUT",
        }
    }

    /// Client-facing description, without the source location
    pub fn client_message(&self) -> String {
        match self {
            Self::Decode { source, .. } => format!("Malformed control message: {source}"),
            Self::InvalidMessage { message, .. } => message.clone(),
            Self::HeartbeatTimeout { timeout_secs, .. } => {
                format!("No traffic for {timeout_secs}s")
            }
            Self::SendBufferFull { .. } => String::from("Client is not keeping up"),
            Self::ConnectionLimitExceeded { max, .. } => {
                format!("Connection limit of {max} reached")
            }
            Self::ConnectionClosed { reason, .. } => reason.clone(),
            Self::Encode { .. } => String::from("Internal server error"),
        }
    }

    /// Malformed input from the peer, answered with an `error` frame before closing
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::InvalidMessage { .. })
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
