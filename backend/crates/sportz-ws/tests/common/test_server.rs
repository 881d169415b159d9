#![allow(dead_code)]

use sportz_ws::{ConnectionConfig, ConnectionLimits, RealtimeHub};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 100,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to the hub for broadcasting and inspection
pub struct TestServerWithHub {
    pub server: TestServer,
    pub hub: RealtimeHub,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithHub {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithHub {
    let (app, hub) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithHub { server, hub }
}

fn create_app(config: TestServerConfig) -> (Router, RealtimeHub) {
    let connection_config = ConnectionConfig {
        send_buffer_size: config.send_buffer_size,
        ..Default::default()
    };
    let limits = ConnectionLimits {
        max_total: config.max_connections_total,
    };
    let hub = RealtimeHub::start(connection_config, limits);

    let router = Router::new()
        .route("/ws", get(sportz_ws::handler))
        .with_state(hub.clone());

    (router, hub)
}

/// Poll until the registry reaches the expected size
pub async fn wait_for_connections(hub: &RealtimeHub, expected: usize) {
    for _ in 0..50 {
        if hub.connection_count().await == expected {
            return;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
    panic!(
        "expected {expected} connections, found {}",
        hub.connection_count().await
    );
}
