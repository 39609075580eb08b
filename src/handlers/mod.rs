//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod benchmark;
pub mod health;
pub mod legacy;
pub mod strategies;

use axum::Router;

use crate::state::AppState;

/// Create all JSON API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/strategies", strategies::routes())
        .merge(benchmark::routes())
}

/// Form-encoded endpoint used by the browser client
pub fn legacy_routes() -> Router<AppState> {
    legacy::routes()
}
