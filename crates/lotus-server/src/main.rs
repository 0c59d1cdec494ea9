//! lotus-server - REST API server binary.

use std::net::SocketAddr;

use lotus_core::config::LotusConfig;
use lotus_server::{create_server, create_server_with_auth, create_state};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("lotus_server=debug".parse()?),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("LOTUS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("LOTUS_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|_| "LOTUS_PORT must be a valid port number")?;
    let require_auth = std::env::var("LOTUS_REQUIRE_AUTH").is_ok();

    // Build providers from environment configuration
    let config = LotusConfig::from_env();
    let state = create_state(&config)?;
    info!(
        completion_model = state.completion.model_name(),
        sentiment_model = state.sentiment.model_name(),
        "Providers initialized"
    );

    // Create server with or without auth
    let app = if require_auth {
        info!("Authentication enabled");
        create_server_with_auth(state)
    } else {
        info!("Authentication disabled");
        create_server(state)
    };

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting lotus-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
