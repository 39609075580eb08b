//! Strategy handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, services::BenchmarkService, state::AppState};

use super::response::{RunResponse, StrategiesListResponse, StrategyResponse};

/// List all strategies
pub async fn list_strategies(State(state): State<AppState>) -> Json<StrategiesListResponse> {
    let strategies: Vec<StrategyResponse> = state
        .registry()
        .list()
        .iter()
        .map(StrategyResponse::from)
        .collect();

    Json(StrategiesListResponse {
        total: strategies.len(),
        strategies,
    })
}

/// Get a specific strategy
pub async fn get_strategy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StrategyResponse>> {
    let descriptor = state.registry().get(&id)?;
    Ok(Json(StrategyResponse::from(descriptor)))
}

/// Run a strategy once and return its output
pub async fn run_strategy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RunResponse>> {
    let sample = BenchmarkService::run_strategy(&state, &id).await?;
    Ok(Json(RunResponse::new(id, sample)))
}
