use sportz_server::{AppState, InMemoryMatchStore, ServerError, ServerResult, build_router, logger};

use sportz_config::Config;
use sportz_ws::RealtimeHub;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env is optional; SPORTZ_* variables may also come from the shell
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::LogDirectory {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sportz-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let hub = RealtimeHub::start((&config.websocket).into(), (&config.server).into());
    let app_state = AppState::new(
        Arc::new(InMemoryMatchStore::new()),
        hub.clone(),
        config.api.clone(),
    );
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;
    let actual_addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!("Server listening on {actual_addr}");

    let hub_for_signal = hub.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                hub_for_signal.stop().await;
            }
            Err(e) => error!("Failed to listen for SIGINT: {e}"),
        }
    });

    let mut shutdown_guard = hub.shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            info!("Graceful shutdown complete");
        })
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}
