use carbon::{CacheEngine, JsonFileStore, bootstrap};
use server_http::{AppState, build_router};
use shared::config::Config;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Carbon HTTP Server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    info!(
        file = %config.file_path.display(),
        save_interval_secs = config.save_interval.as_secs(),
        "Configuration loaded"
    );

    let store = Arc::new(JsonFileStore::new(config.file_path.clone()));
    let engine = Arc::new(CacheEngine::new(store));

    // Hydrate before persistence starts and before traffic is accepted
    bootstrap(&engine);

    let persistence = engine.start_persistence(config.save_interval)?;

    let initial = engine.snapshot();
    info!(entries = initial.len(), "Initial cache ready");
    debug!(?initial, "Initial cache contents");

    let router = build_router(AppState::new(engine.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("HTTP Server listening on http://{}", config.bind_address());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the scheduler, then write one last snapshot
    if let Err(e) = persistence.shutdown().await {
        error!("Persistence scheduler did not stop cleanly: {}", e);
    }
    match engine.persist_in_background().await {
        Ok(entries) => info!(entries, "Final snapshot written"),
        Err(e) => error!("Failed to write final snapshot: {}", e),
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
