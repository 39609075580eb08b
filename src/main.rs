//! FizzBench - Application Entry Point
//!
//! This is the main entry point for the FizzBench server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fizzbench::{
    config::{LogFormat, CONFIG},
    state::AppState,
    strategies,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match CONFIG.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting FizzBench server...");

    // Build the strategy catalog once; it is read-only from here on
    let catalog = strategies::builtin_registry(CONFIG.benchmark.fizzbuzz_limit)?;
    tracing::info!(
        strategies = catalog.len(),
        limit = CONFIG.benchmark.fizzbuzz_limit,
        iterations = CONFIG.benchmark.iterations,
        "Strategy catalog loaded"
    );

    // Create application state
    let state = AppState::new(catalog, CONFIG.clone());

    // Build the router
    let app = fizzbench::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
