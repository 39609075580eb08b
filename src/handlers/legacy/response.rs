//! Legacy response DTOs

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    benchmark::ranking,
    models::{ExecutionSample, RankedResult, SortKey},
    utils::round_millis,
};

/// Body of every legacy response
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LegacyResponse {
    Run(RunPayload),
    Benchmark(BenchmarkPayload),
    Error(ErrorPayload),
}

impl LegacyResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            error: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPayload {
    pub output: String,
    pub execution_time: f64,
}

impl From<ExecutionSample> for RunPayload {
    fn from(sample: ExecutionSample) -> Self {
        Self {
            output: sample.output,
            execution_time: round_millis(sample.elapsed_ms),
        }
    }
}

/// Results keyed by strategy id, ordered by ascending mean time
#[derive(Debug, Serialize)]
pub struct BenchmarkPayload {
    pub results: IndexMap<String, BenchmarkEntry>,
}

impl BenchmarkPayload {
    /// Ranks come from full-precision timings; only the reported values are rounded,
    /// so two entries showing the same `time` still carry distinct ranks.
    pub fn new(results: &[RankedResult]) -> Self {
        Self {
            results: ranking::sort_by(results, SortKey::Mean)
                .into_iter()
                .map(|result| (result.summary.strategy_id.clone(), BenchmarkEntry::from(result)))
                .collect(),
        }
    }
}

/// Per-strategy entry; `rank` orders by mean only
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkEntry {
    pub name: String,
    pub time: f64,
    pub min: f64,
    pub max: f64,
    pub runs: u32,
    pub rank: u32,
    pub variance: f64,
    pub overall_score: u32,
    pub overall_rank: u32,
    pub rank_breakdown: RankBreakdownPayload,
}

/// Per-metric ranks under the client's metric names
#[derive(Debug, Serialize)]
pub struct RankBreakdownPayload {
    pub time: u32,
    pub min: u32,
    pub max: u32,
    pub variance: u32,
}

impl From<&RankedResult> for BenchmarkEntry {
    fn from(result: &RankedResult) -> Self {
        let summary = &result.summary;
        Self {
            name: summary.name.clone(),
            time: round_millis(summary.mean_ms),
            min: round_millis(summary.min_ms),
            max: round_millis(summary.max_ms),
            runs: summary.sample_count,
            rank: result.ranks.mean,
            variance: round_millis(result.variance_ms),
            overall_score: result.overall_score,
            overall_rank: result.overall_rank,
            rank_breakdown: RankBreakdownPayload {
                time: result.ranks.mean,
                min: result.ranks.min,
                max: result.ranks.max,
                variance: result.ranks.variance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::StrategySummary,
        strategies::{StrategyDescriptor, StrategyRegistry},
    };

    fn summary(id: &str, mean_ms: f64) -> StrategySummary {
        StrategySummary {
            strategy_id: id.to_string(),
            name: id.to_uppercase(),
            mean_ms,
            min_ms: mean_ms,
            max_ms: mean_ms,
            sample_count: 10,
        }
    }

    #[test]
    fn test_ranks_use_unrounded_timings() {
        let mut registry = StrategyRegistry::new();
        for id in ["first", "second"] {
            registry
                .register(StrategyDescriptor::new(id, id, |_| Ok(())))
                .unwrap();
        }
        // Both round to 1.000 ms; registration order alone would favour "first"
        let summaries = [summary("first", 1.0004), summary("second", 1.0001)];
        let ranked = ranking::rank(&summaries, &registry).unwrap();

        let payload = BenchmarkPayload::new(&ranked);
        let ids: Vec<&str> = payload.results.keys().map(String::as_str).collect();
        assert_eq!(ids, ["second", "first"]);

        let (first, second) = (&payload.results["first"], &payload.results["second"]);
        assert_eq!(first.time, second.time);
        assert_eq!((second.rank, first.rank), (1, 2));
        assert_eq!((second.overall_rank, first.overall_rank), (1, 2));
        assert_eq!(second.rank_breakdown.min, 1);
    }
}
