use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_server::config::ServerConfig;
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flight_server=info,tower_http=info")),
        )
        .init();

    info!("starting application");

    let config = ServerConfig::from_env().inspect_err(|e| error!("{e}"))?;

    // Build app state and router
    let state = AppState::from_config(&config);
    let app = create_router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        payload_format = %config.payload_format,
        request_timeout_ms = config.request_timeout.as_millis() as u64,
        "flight path tracker listening"
    );
    info!("  GET  /health     - Health check");
    info!("  POST /calculate  - Resolve an itinerary's origin and destination");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down application");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
