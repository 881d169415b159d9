use crate::{
    ConnectionConfig, ConnectionLimits, ConnectionRegistry, MatchBroadcaster, MatchEventSink,
    Metrics, ShutdownCoordinator,
};

use std::sync::Arc;

use log::info;

/// Owns the real-time subsystem: registry, dispatcher and shutdown signal.
///
/// Built once at startup and handed to the `/ws` route and to the write
/// path. Cloning shares the same registry.
#[derive(Clone)]
pub struct RealtimeHub {
    pub registry: ConnectionRegistry,
    pub broadcaster: MatchBroadcaster,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl RealtimeHub {
    pub fn start(config: ConnectionConfig, limits: ConnectionLimits) -> Self {
        let registry = ConnectionRegistry::new(limits);
        let metrics = Metrics::new();
        let broadcaster = MatchBroadcaster::new(registry.clone(), metrics.clone());

        info!(
            "Realtime hub started (max {} connections, queue {} frames)",
            registry.limits().max_total,
            config.send_buffer_size
        );

        Self {
            registry,
            broadcaster,
            metrics,
            shutdown: ShutdownCoordinator::new(),
            config,
        }
    }

    /// The sink handed to the HTTP write path
    pub fn event_sink(&self) -> Arc<dyn MatchEventSink> {
        Arc::new(self.broadcaster.clone())
    }

    pub fn is_running(&self) -> bool {
        !self.shutdown.is_shutdown()
    }

    /// Signal every connection to go away, then close what is left.
    /// Returns the number of connections closed; 0 if already stopped.
    pub async fn stop(&self) -> usize {
        if !self.shutdown.shutdown() {
            return 0;
        }

        let closed = self.registry.close_all().await;
        info!("Realtime hub stopped ({closed} connections closed)");
        closed
    }

    pub async fn connection_count(&self) -> usize {
        self.registry.total_count().await
    }
}
