//! Form-encoded endpoint of the browser client
//!
//! The client posts `action=run&version=<id>` or `action=benchmark` and reads
//! failures from an in-band `error` field; the status is always 200.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::{constants::LEGACY_API_PATH, state::AppState};

/// Legacy routes
pub fn routes() -> Router<AppState> {
    Router::new().route(LEGACY_API_PATH, post(handler::dispatch))
}
