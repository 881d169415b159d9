use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, ControlMessage, MessageCodec, Metrics,
    Result as WsErrorResult, ServerMessage, ShutdownGuard, WsError,
};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{CloseFrame, Message, Utf8Bytes, WebSocket, close_code};
use bytes::Bytes;
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::{Notify, mpsc};
use tokio::time::{Instant, MissedTickBehavior};

/// How long the writer may keep flushing after the read loop has ended
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// What the read loop should do after an inbound frame
enum Flow {
    Continue,
    Stop,
}

/// Manages a single WebSocket connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    registry: ConnectionRegistry,
    config: ConnectionConfig,
    metrics: Metrics,
    outbound: mpsc::Sender<Message>,
    closed: Arc<Notify>,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        registry: ConnectionRegistry,
        config: ConnectionConfig,
        metrics: Metrics,
        outbound: mpsc::Sender<Message>,
        closed: Arc<Notify>,
    ) -> Self {
        Self {
            connection_id,
            registry,
            config,
            metrics,
            outbound,
            closed,
        }
    }

    /// Handle the WebSocket connection lifecycle.
    ///
    /// `outbound_rx` is the receiving end of the queue registered for this
    /// connection; a dedicated writer task drains it in FIFO order.
    pub async fn handle(
        self,
        socket: WebSocket,
        mut outbound_rx: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Writer task; stops after forwarding a close frame
        let writer_id = self.connection_id;
        let mut send_task = tokio::spawn(async move {
            while let Some(msg) = outbound_rx.recv().await {
                let is_close = matches!(msg, Message::Close(_));
                if let Err(e) = ws_sender.send(msg).await {
                    debug!("Writer for connection {writer_id} failed: {e}");
                    break;
                }
                if is_close {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });
        let mut send_done = false;

        let mut heartbeat = tokio::time::interval(self.config.heartbeat_interval());
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        heartbeat.tick().await;
        let mut last_seen = Instant::now();

        let result = loop {
            tokio::select! {
                frame = ws_receiver.next() => {
                    match frame {
                        Some(Ok(msg)) => {
                            last_seen = Instant::now();
                            match self.handle_client_message(msg).await {
                                Ok(Flow::Continue) => {}
                                Ok(Flow::Stop) => break Ok(()),
                                Err(e) => {
                                    if e.is_protocol_error() {
                                        warn!(
                                            "Protocol error on connection {}: {e}",
                                            self.connection_id
                                        );
                                        self.reject(&e);
                                    }
                                    self.metrics.error_occurred(e.error_code());
                                    break Err(e);
                                }
                            }
                        }
                        Some(Err(e)) => {
                            debug!("WebSocket error on connection {}: {e}", self.connection_id);
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                // Registry released this connection (eviction or hub stop)
                _ = self.closed.notified() => {
                    if shutdown_guard.poll_shutdown() {
                        self.going_away();
                    }
                    info!("Connection {} closed by server", self.connection_id);
                    break Ok(());
                }

                _ = shutdown_guard.wait() => {
                    info!("Shutting down connection {} gracefully", self.connection_id);
                    self.going_away();
                    break Ok(());
                }

                _ = heartbeat.tick() => {
                    if last_seen.elapsed() >= self.config.heartbeat_timeout() {
                        warn!(
                            "Connection {} missed heartbeat for {}s",
                            self.connection_id,
                            self.config.heartbeat_timeout_secs
                        );
                        break Err(WsError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    // A full queue means the client is already behind; skip this ping
                    let _ = self.outbound.try_send(Message::Ping(Bytes::new()));
                }

                _ = &mut send_task => {
                    send_done = true;
                    debug!("Writer for connection {} finished", self.connection_id);
                    break Ok(());
                }
            }
        };

        // Cleanup
        self.registry.close(self.connection_id).await;
        let Self {
            connection_id,
            metrics,
            outbound,
            ..
        } = self;
        drop(outbound);

        if !send_done
            && tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut send_task)
                .await
                .is_err()
        {
            warn!("Writer for connection {connection_id} did not drain in time, aborting");
            send_task.abort();
        }

        metrics.connection_closed(match &result {
            Ok(()) => "normal",
            Err(e) if e.is_protocol_error() => "protocol_error",
            Err(WsError::HeartbeatTimeout { .. }) => "heartbeat_timeout",
            Err(_) => "error",
        });
        info!("WebSocket connection {connection_id} closed");

        result
    }

    /// Handle a message from the client
    async fn handle_client_message(&self, msg: Message) -> WsErrorResult<Flow> {
        match msg {
            Message::Text(text) => {
                let control = MessageCodec::decode(text.as_str())?;
                debug!(
                    "Connection {} sent {} for {}",
                    self.connection_id,
                    control.message_type(),
                    control.topic()
                );
                self.metrics.message_received(control.message_type());
                self.handle_control(control).await
            }
            Message::Binary(data) => Err(WsError::invalid_message(format!(
                "Binary frames are not supported ({} bytes received)",
                data.len()
            ))),
            // Pongs to client pings are sent by the transport
            Message::Ping(_) | Message::Pong(_) => Ok(Flow::Continue),
            Message::Close(frame) => {
                debug!(
                    "Received close frame from connection {}: {:?}",
                    self.connection_id, frame
                );
                Ok(Flow::Stop)
            }
        }
    }

    async fn handle_control(&self, control: ControlMessage) -> WsErrorResult<Flow> {
        let (accepted, ack) = match control {
            ControlMessage::Subscribe { topic } => {
                let ack = MessageCodec::encode_server(&ServerMessage::Subscribed { topic })?;
                let accepted = self
                    .registry
                    .subscribe_with_ack(self.connection_id, topic, ack.to_message())
                    .await?;
                (accepted, ack)
            }
            ControlMessage::Unsubscribe { topic } => {
                let ack = MessageCodec::encode_server(&ServerMessage::Unsubscribed { topic })?;
                let accepted = self
                    .registry
                    .unsubscribe_with_ack(self.connection_id, topic, ack.to_message())
                    .await?;
                (accepted, ack)
            }
        };

        // Already closed by the registry
        if !accepted {
            return Ok(Flow::Stop);
        }
        self.metrics.subscription_changed(control.message_type());
        self.metrics.message_sent(ack.message_type);
        Ok(Flow::Continue)
    }

    /// Queue a frame behind any pending event frames
    fn enqueue(&self, message: &ServerMessage) -> WsErrorResult<()> {
        let frame = MessageCodec::encode_server(message)?;
        self.outbound
            .try_send(frame.to_message())
            .map_err(WsError::from_try_send)?;
        self.metrics.message_sent(frame.message_type);
        Ok(())
    }

    /// Tell the client why it is being dropped, then close with a policy violation
    fn reject(&self, error: &WsError) {
        let _ = self.enqueue(&ServerMessage::Error {
            code: error.error_code().to_string(),
            message: error.client_message(),
        });
        self.queue_close(close_code::POLICY, "protocol error");
    }

    fn going_away(&self) {
        self.queue_close(close_code::AWAY, "server shutting down");
    }

    fn queue_close(&self, code: u16, reason: &'static str) {
        let _ = self.outbound.try_send(Message::Close(Some(CloseFrame {
            code,
            reason: Utf8Bytes::from_static(reason),
        })));
    }
}
