//! Metrics collection and analysis

use crate::models::StrategySummary;

/// Collects per-iteration timings of one strategy
pub struct MetricsCollector {
    samples: Vec<f64>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create a collector sized for `iterations` samples
    pub fn with_capacity(iterations: u32) -> Self {
        Self {
            samples: Vec::with_capacity(iterations as usize),
        }
    }

    /// Add a sample in milliseconds
    pub fn add_sample(&mut self, elapsed_ms: f64) {
        self.samples.push(elapsed_ms);
    }

    /// Reduce the samples to mean, min and max. `None` when nothing was collected.
    ///
    /// Values are kept at full precision; rounding happens when a response is built.
    pub fn summarize(&self, strategy_id: &str, name: &str) -> Option<StrategySummary> {
        if self.samples.is_empty() {
            return None;
        }

        let count = self.samples.len();
        let min_ms = self.samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ms = self.samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean_ms = (self.samples.iter().sum::<f64>() / count as f64)
            // Summation error on identical samples can leave the mean one ulp outside
            .clamp(min_ms, max_ms);

        Some(StrategySummary {
            strategy_id: strategy_id.to_string(),
            name: name.to_string(),
            mean_ms,
            min_ms,
            max_ms,
            sample_count: count as u32,
        })
    }

    /// Clear all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
