// snap2sabre - Flight screenshot to Sabre GDS air segment converter
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use snap2sabre::cli::Args;
use snap2sabre::config::AppConfig;
use snap2sabre::inference::OpenAiClient;
use snap2sabre::server::create_router;
use snap2sabre::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load_from(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting snap2sabre v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Resolve the inference credential (read once, never reloaded)
    config.resolve_api_key()?;
    let client = OpenAiClient::new(&config.inference)?
        .with_log_sanitizing(config.logging.sanitize_tokens);
    info!(
        "Using model {} via {}",
        config.inference.model, config.inference.api_base_url
    );

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, Arc::new(client))?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

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
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
