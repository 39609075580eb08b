//! Benchmark handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    benchmark::ranking,
    error::AppResult,
    models::{RankedResult, SortKey},
    services::BenchmarkService,
    state::AppState,
};

use super::{
    request::{BenchmarkQuery, RerankRequest},
    response::{BenchmarkResponse, RankedResultResponse, RankingsResponse},
};

/// Benchmark every strategy and return the ranked results
pub async fn run_benchmark(
    State(state): State<AppState>,
    Query(query): Query<BenchmarkQuery>,
) -> AppResult<Json<BenchmarkResponse>> {
    let sort = query.sort.unwrap_or_default();
    let report = BenchmarkService::benchmark_all(&state, query.iterations).await?;

    Ok(Json(BenchmarkResponse {
        iterations: report.iterations,
        sort,
        results: sorted(&report.results, sort),
    }))
}

/// Rank a stored summary set again, optionally in another order
pub async fn rerank(
    State(state): State<AppState>,
    Json(payload): Json<RerankRequest>,
) -> AppResult<Json<RankingsResponse>> {
    payload.validate()?;

    let sort = payload.sort.unwrap_or_default();
    let results = BenchmarkService::rerank(&state, payload.summaries)?;

    Ok(Json(RankingsResponse {
        sort,
        results: sorted(&results, sort),
    }))
}

fn sorted(results: &[RankedResult], sort: SortKey) -> Vec<RankedResultResponse> {
    tracing::debug!(%sort, results = results.len(), "Ordering ranked results");
    ranking::sort_by(results, sort)
        .into_iter()
        .map(RankedResultResponse::from)
        .collect()
}
