//! Benchmark result models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single timed execution
#[derive(Debug, Clone)]
pub struct ExecutionSample {
    /// Wall clock time in milliseconds
    pub elapsed_ms: f64,
    /// Captured text; empty when the output was discarded
    pub output: String,
}

/// Aggregated timing of one strategy across a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy_id: String,
    #[serde(default)]
    pub name: String,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub sample_count: u32,
}

impl StrategySummary {
    /// Spread between the slowest and the fastest sample
    pub fn variance_ms(&self) -> f64 {
        self.max_ms - self.min_ms
    }

    /// Value of `key` for this summary. `Overall` has no raw value and maps to the mean.
    pub fn metric(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Mean | SortKey::Overall => self.mean_ms,
            SortKey::Min => self.min_ms,
            SortKey::Max => self.max_ms,
            SortKey::Variance => self.variance_ms(),
        }
    }
}

/// Per-metric rank positions of one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBreakdown {
    pub mean: u32,
    pub min: u32,
    pub max: u32,
    pub variance: u32,
}

impl RankBreakdown {
    /// Rank-sum score; lower is better
    pub fn score(&self) -> u32 {
        self.mean + self.min + self.max + self.variance
    }
}

/// A summary together with its ranks over every metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub summary: StrategySummary,
    pub variance_ms: f64,
    pub ranks: RankBreakdown,
    pub overall_score: u32,
    pub overall_rank: u32,
}

impl RankedResult {
    pub fn strategy_id(&self) -> &str {
        &self.summary.strategy_id
    }

    /// Value the presenter sorts on for `key`
    pub fn sort_value(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Overall => f64::from(self.overall_score),
            _ => self.summary.metric(key),
        }
    }
}

/// Keys a ranked result set can be ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[serde(alias = "avg", alias = "time")]
    Mean,
    Min,
    Max,
    Variance,
    #[default]
    Overall,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Mean,
        SortKey::Min,
        SortKey::Max,
        SortKey::Variance,
        SortKey::Overall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Mean => "mean",
            SortKey::Min => "min",
            SortKey::Max => "max",
            SortKey::Variance => "variance",
            SortKey::Overall => "overall",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
