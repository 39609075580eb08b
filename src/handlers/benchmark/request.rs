//! Benchmark request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_RANKED_SUMMARIES,
    models::{SortKey, StrategySummary},
};

/// Benchmark query parameters
#[derive(Debug, Default, Deserialize)]
pub struct BenchmarkQuery {
    /// Iterations per strategy; the configured default when absent
    pub iterations: Option<u32>,
    /// Order of the returned results
    pub sort: Option<SortKey>,
}

/// Re-rank a previously returned summary set
#[derive(Debug, Deserialize, Validate)]
pub struct RerankRequest {
    #[validate(length(min = 1, max = MAX_RANKED_SUMMARIES))]
    pub summaries: Vec<StrategySummary>,

    pub sort: Option<SortKey>,
}
