use crate::MatchStore;

use sportz_config::ApiConfig;
use sportz_ws::{MatchEventSink, RealtimeHub};

use std::sync::Arc;

use axum::extract::FromRef;

/// Shared application state for the HTTP routes and the `/ws` upgrade
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchStore>,
    /// Write path's handle on the real-time channel
    pub events: Arc<dyn MatchEventSink>,
    pub realtime: RealtimeHub,
    pub api_config: ApiConfig,
}

impl AppState {
    /// Wires the event sink to the hub's dispatcher
    pub fn new(store: Arc<dyn MatchStore>, realtime: RealtimeHub, api_config: ApiConfig) -> Self {
        Self {
            store,
            events: realtime.event_sink(),
            realtime,
            api_config,
        }
    }
}

impl FromRef<AppState> for RealtimeHub {
    fn from_ref(state: &AppState) -> Self {
        state.realtime.clone()
    }
}
