//! Resort Portal - Application Entry Point

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resort_portal::{backend::HttpBackend, config::CONFIG, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting resort portal...");

    let backend = HttpBackend::new(&CONFIG.backend)?;
    tracing::info!(
        api_url = %CONFIG.backend.api_url,
        timeout_seconds = CONFIG.backend.timeout_seconds,
        "Resort backend configured"
    );

    // Create application state
    let state = AppState::new(Arc::new(backend), &CONFIG);

    // Build the router
    let app = handlers::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
