use crate::{ConnectionRegistry, DomainEvent, MessageCodec, Metrics, MetricsTimer, topic_of};

use log::{debug, error, warn};
use tokio::sync::mpsc::error::TrySendError;

/// Fans a domain event out to every connection subscribed to its topic.
///
/// Delivery never waits on a client: each frame is `try_send`-ed into the
/// recipient's bounded queue. A full or closed queue evicts that recipient
/// without affecting the rest of the fan-out.
pub struct MatchBroadcaster {
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl MatchBroadcaster {
    pub fn new(registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self { registry, metrics }
    }

    /// Returns the number of recipients whose queue accepted the frame
    pub async fn dispatch(&self, event: &DomainEvent) -> usize {
        let topic = topic_of(event);
        let recipients = self.registry.subscribers_of(&topic).await;

        if recipients.is_empty() {
            debug!("No subscribers for {} on topic {topic}", event.message_type());
            return 0;
        }

        let timer = MetricsTimer::new(self.metrics.clone());

        let frame = match MessageCodec::encode(event) {
            Ok(frame) => frame,
            Err(e) => {
                error!("Failed to encode {}: {e}", event.message_type());
                self.metrics.error_occurred("encode");
                return 0;
            }
        };

        let mut delivered = 0;
        let mut evicted = Vec::new();

        for (connection_id, sender) in recipients {
            match sender.try_send(frame.to_message()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Connection {connection_id} outbound queue full, evicting slow consumer");
                    self.metrics.subscriber_evicted("slow_consumer");
                    evicted.push(connection_id);
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Connection {connection_id} writer gone, evicting");
                    self.metrics.subscriber_evicted("closed");
                    evicted.push(connection_id);
                }
            }
        }

        for connection_id in evicted {
            self.registry.close(connection_id).await;
        }

        debug!(
            "Dispatched {} on topic {topic} to {delivered} connection(s)",
            frame.message_type
        );
        self.metrics.broadcast_published(frame.message_type, delivered);
        timer.finish();

        delivered
    }
}

impl Clone for MatchBroadcaster {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            metrics: self.metrics.clone(),
        }
    }
}
