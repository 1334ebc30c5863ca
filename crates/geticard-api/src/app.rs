//! Application builder: wires backends, state, and router into a running server.

use std::sync::Arc;

use axum::Router;
use mockable::DefaultClock;
use tower_http::trace::TraceLayer;
use tracing::info;

use geticard_core::config::AppConfig;
use geticard_core::error::AppError;
use geticard_database::create_store;
use geticard_storage::ImageStore;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connects the configured backends and serves until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting GetiCard v{}", env!("CARGO_PKG_VERSION"));

    let store = create_store(&config.store).await?;
    if !store.health_check().await? {
        tracing::warn!(
            provider = store.provider_type(),
            "Record store did not answer the startup probe; continuing"
        );
    }

    let images = Arc::new(ImageStore::from_config(&config.storage).await?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store, images, Arc::new(DefaultClock));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!("GetiCard listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
    info!("Shutdown signal received");
}
