//! Benchmark response DTOs

use serde::Serialize;

use crate::{
    models::{RankBreakdown, RankedResult, SortKey},
    utils::round_millis,
};

/// One ranked strategy, timings rounded for display
#[derive(Debug, Serialize)]
pub struct RankedResultResponse {
    pub strategy_id: String,
    pub name: String,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub variance_ms: f64,
    pub sample_count: u32,
    pub ranks: RankBreakdown,
    pub overall_score: u32,
    pub overall_rank: u32,
}

impl From<&RankedResult> for RankedResultResponse {
    fn from(result: &RankedResult) -> Self {
        Self {
            strategy_id: result.summary.strategy_id.clone(),
            name: result.summary.name.clone(),
            mean_ms: round_millis(result.summary.mean_ms),
            min_ms: round_millis(result.summary.min_ms),
            max_ms: round_millis(result.summary.max_ms),
            variance_ms: round_millis(result.variance_ms),
            sample_count: result.summary.sample_count,
            ranks: result.ranks,
            overall_score: result.overall_score,
            overall_rank: result.overall_rank,
        }
    }
}

/// Full benchmark response
#[derive(Debug, Serialize)]
pub struct BenchmarkResponse {
    pub iterations: u32,
    pub sort: SortKey,
    pub results: Vec<RankedResultResponse>,
}

/// Re-ranking response
#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub sort: SortKey,
    pub results: Vec<RankedResultResponse>,
}
