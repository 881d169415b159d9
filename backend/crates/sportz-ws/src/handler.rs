use crate::{
    MessageCodec, RealtimeHub, ServerMessage, TransportHandle, WebSocketConnection, WsError,
};

use std::sync::Arc;

use axum::{
    extract::{State, ws::WebSocketUpgrade},
    http::StatusCode,
    response::Response,
};
use log::{debug, error, warn};
use tokio::sync::{Notify, mpsc};

/// WebSocket upgrade handler for `/ws`
pub async fn handler(
    State(hub): State<RealtimeHub>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if !hub.is_running() {
        debug!("Rejecting upgrade, realtime hub is stopped");
        hub.metrics.connection_rejected("stopped");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let (tx, rx) = mpsc::channel(hub.config.send_buffer_size);
    let closed = Arc::new(Notify::new());

    // Queued before registration so it always precedes any event frame
    let welcome = MessageCodec::encode_server(&ServerMessage::Welcome).map_err(|e| {
        error!("Failed to encode welcome frame: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    tx.try_send(welcome.to_message()).map_err(|_| {
        error!("Outbound queue rejected the welcome frame");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // Register connection (enforces connection limits)
    let connection_id = hub
        .registry
        .register(TransportHandle::new(tx.clone(), Arc::clone(&closed)))
        .await
        .map_err(|e| {
            warn!("Failed to register connection: {e}");
            if let WsError::ConnectionLimitExceeded { .. } = e {
                hub.metrics.connection_rejected("limit");
            }
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    // Stop raced with registration
    if !hub.is_running() {
        hub.registry.close(connection_id).await;
        hub.metrics.connection_rejected("stopped");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let failed_registry = hub.registry.clone();
    let shutdown_guard = hub.shutdown.subscribe_guard();
    let connection = WebSocketConnection::new(
        connection_id,
        hub.registry.clone(),
        hub.config.clone(),
        hub.metrics.clone(),
        tx,
        closed,
    );

    Ok(ws
        .max_message_size(hub.config.max_message_size)
        .max_frame_size(hub.config.max_message_size)
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade failed for connection {connection_id}: {e}");
            tokio::spawn(async move {
                failed_registry.close(connection_id).await;
            });
        })
        .on_upgrade(move |socket| async move {
            if let Err(e) = connection.handle(socket, rx, shutdown_guard).await {
                debug!("Connection {connection_id} ended with error: {e}");
            }
        }))
}
