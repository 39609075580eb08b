//! Strategy catalog handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Strategy routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_strategies))
        .route("/{id}", get(handler::get_strategy))
        .route("/{id}/run", post(handler::run_strategy))
}
