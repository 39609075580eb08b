//! FizzBench - FizzBuzz Strategy Benchmarking Service
//!
//! This library runs a fixed catalog of FizzBuzz implementations, times them
//! and ranks them over several timing metrics.
//!
//! # Features
//!
//! - Statically compiled strategies selected by id
//! - Single runs with captured output, full benchmarks with discarded output
//! - Rank-sum scoring over mean, min, max and variance
//! - JSON API plus the form-encoded endpoint the browser client posts to
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: scheduling of measurements on the blocking pool
//! - **Benchmark**: executor, runner, metrics and ranking
//! - **Strategies**: registry and built-in catalog
//! - **Models**: domain models

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod strategies;
pub mod utils;

use std::time::Duration;

use axum::{middleware as axum_middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

use constants::{API_BASE_PATH, MAX_REQUEST_BODY_SIZE};

/// Build the full application router around `state`
pub fn app(state: AppState) -> Router {
    let server = &state.config().server;
    let timeout = Duration::from_secs(server.request_timeout_secs);

    let mut router = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .merge(handlers::legacy_routes());

    if let Some(dir) = &server.static_dir {
        tracing::info!("Serving static assets from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_SIZE))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
