//! Benchmark and ranking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Benchmark routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/benchmark", post(handler::run_benchmark))
        .route("/rankings", post(handler::rerank))
}
