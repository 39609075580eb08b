//! Strategy response DTOs

use serde::Serialize;

use crate::{models::ExecutionSample, strategies::StrategyDescriptor, utils::round_millis};

/// Strategy metadata
#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub complexity: String,
    pub source: String,
}

impl From<&StrategyDescriptor> for StrategyResponse {
    fn from(descriptor: &StrategyDescriptor) -> Self {
        Self {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            complexity: descriptor.complexity.clone(),
            source: descriptor.source.clone(),
        }
    }
}

/// Catalog in registration order
#[derive(Debug, Serialize)]
pub struct StrategiesListResponse {
    pub strategies: Vec<StrategyResponse>,
    pub total: usize,
}

/// Result of a single run
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub strategy_id: String,
    pub output: String,
    pub execution_time_ms: f64,
}

impl RunResponse {
    pub fn new(strategy_id: String, sample: ExecutionSample) -> Self {
        Self {
            strategy_id,
            output: sample.output,
            execution_time_ms: round_millis(sample.elapsed_ms),
        }
    }
}
