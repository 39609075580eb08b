//! Legacy handler implementations

use axum::{extract::State, Form, Json};

use crate::{
    constants::{actions, DEFAULT_STRATEGY_ID},
    error::{AppError, AppResult},
    services::BenchmarkService,
    state::AppState,
};

use super::{
    request::ActionForm,
    response::{BenchmarkPayload, LegacyResponse, RunPayload},
};

/// Dispatch on the posted `action` field
pub async fn dispatch(
    State(state): State<AppState>,
    Form(form): Form<ActionForm>,
) -> Json<LegacyResponse> {
    let result = match form.action.as_deref() {
        Some(actions::RUN) => {
            let id = form.version.as_deref().unwrap_or(DEFAULT_STRATEGY_ID);
            run(&state, id).await
        }
        Some(actions::BENCHMARK) => benchmark(&state).await,
        other => {
            tracing::debug!(action = ?other, "Unknown legacy action");
            Ok(LegacyResponse::error("Unknown action"))
        }
    };

    Json(result.unwrap_or_else(|err| {
        if !matches!(err, AppError::NotFound(_)) {
            tracing::warn!(error = %err, "Legacy request failed");
        }
        LegacyResponse::error(in_band_message(&err))
    }))
}

async fn run(state: &AppState, id: &str) -> AppResult<LegacyResponse> {
    let sample = BenchmarkService::run_strategy(state, id).await?;
    Ok(LegacyResponse::Run(RunPayload::from(sample)))
}

async fn benchmark(state: &AppState) -> AppResult<LegacyResponse> {
    let report = BenchmarkService::benchmark_all(state, None).await?;
    Ok(LegacyResponse::Benchmark(BenchmarkPayload::new(&report.results)))
}

fn in_band_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(_) => "Unknown version".to_string(),
        _ => err.public_message(),
    }
}
