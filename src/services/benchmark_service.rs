//! Benchmark service - Schedules measurements and ranks their results

use crate::{
    benchmark::ranking,
    error::{AppError, AppResult},
    models::{ExecutionSample, RankedResult, StrategySummary},
    state::AppState,
};

/// Outcome of a full benchmark request
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub iterations: u32,
    /// Ranked results in registration order
    pub results: Vec<RankedResult>,
}

/// Benchmark service for executing and measuring strategies
pub struct BenchmarkService;

impl BenchmarkService {
    /// Run one strategy once, capturing its output
    pub async fn run_strategy(state: &AppState, id: &str) -> AppResult<ExecutionSample> {
        // Reject unknown ids before queueing for a permit
        state.registry().get(id)?;

        let runner = state.runner();
        let id = id.to_string();
        Self::measure(state, move || runner.run_once(&id)).await
    }

    /// Benchmark every strategy and rank the summaries.
    ///
    /// `iterations` falls back to the configured default.
    pub async fn benchmark_all(
        state: &AppState,
        iterations: Option<u32>,
    ) -> AppResult<BenchmarkReport> {
        let iterations = iterations.unwrap_or(state.config().benchmark.iterations);
        tracing::info!(iterations, "Starting benchmark of all strategies");

        let runner = state.runner();
        let summaries = Self::measure(state, move || runner.run_all(iterations)).await?;
        let results = ranking::rank(&summaries, state.registry())?;

        Ok(BenchmarkReport {
            iterations,
            results,
        })
    }

    /// Rank a summary set produced by an earlier run, without measuring anything
    pub fn rerank(
        state: &AppState,
        mut summaries: Vec<StrategySummary>,
    ) -> AppResult<Vec<RankedResult>> {
        if summaries.is_empty() {
            return Err(AppError::Validation(
                "At least one summary is required".to_string(),
            ));
        }

        for summary in summaries.iter_mut() {
            if !(summary.min_ms <= summary.mean_ms && summary.mean_ms <= summary.max_ms)
                || summary.min_ms < 0.0
            {
                return Err(AppError::Validation(format!(
                    "Summary for {} must satisfy 0 <= min <= mean <= max",
                    summary.strategy_id
                )));
            }
            if summary.name.is_empty() {
                summary.name = state.registry().get(&summary.strategy_id)?.name.clone();
            }
        }

        ranking::rank(&summaries, state.registry())
    }

    /// Run `job` on the blocking pool once a measurement permit is free.
    ///
    /// The permit moves into the job so it is held until the measurement ends,
    /// even if the request that started it has gone away.
    async fn measure<T, F>(state: &AppState, job: F) -> AppResult<T>
    where
        F: FnOnce() -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = state
            .measurement_permits()
            .acquire_owned()
            .await
            .map_err(anyhow::Error::new)?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        })
        .await?
    }
}
