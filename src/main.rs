//! kona - a read-only JSON API over a Hawaii climate observations database
//!
//! This is the main entry point for the kona application.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info};

use kona::{
    create_router, init_tracing, log_dataset_stats, log_error, log_operation_end,
    log_operation_start, AppState, ClimateStore, Config, KonaError, Result, SqliteStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before tracing so the configured level applies
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting kona v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let database = config.data.database_path.display().to_string();
    let check_start = Instant::now();
    log_operation_start("dataset_check", Some(&database));

    let store = SqliteStore::open(&config.data.database_path).map_err(|e| {
        log_error(&e, "opening database");
        e
    })?;
    let state = AppState::new_shared(config.clone(), Arc::new(store))?;

    // Refuse to start against a database without the expected tables
    if let Err(e) = state.validate() {
        log_error(&e, "validating database schema");
        log_operation_end("dataset_check", check_start, false);
        return Err(e);
    }
    let summary = ClimateStore::summary(state.store.as_ref())?;
    log_dataset_stats(&database, &summary);
    log_operation_end("dataset_check", check_start, true);

    info!(tobs_source = %state.tobs_column, "Tobs endpoint column");

    let app = create_router(state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| KonaError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
