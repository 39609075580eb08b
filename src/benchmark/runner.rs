//! Benchmark runner - Orchestrates the benchmarking process

use std::sync::Arc;
use std::time::Instant;

use crate::{
    constants::DEFAULT_BENCHMARK_MAX_ITERATIONS,
    error::{AppError, AppResult},
    models::{ExecutionSample, StrategySummary},
    strategies::StrategyRegistry,
    utils::time::format_duration,
};

use super::{executor::TimedExecutor, metrics::MetricsCollector};

/// Drives the timed executor over the registered strategies.
///
/// All work happens on the calling thread, one strategy after the other.
#[derive(Clone)]
pub struct BenchmarkRunner {
    registry: Arc<StrategyRegistry>,
    max_iterations: u32,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self {
            registry,
            max_iterations: DEFAULT_BENCHMARK_MAX_ITERATIONS,
        }
    }

    /// Cap the iteration count accepted by [`run_all`](Self::run_all)
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run one strategy once and return what it printed
    pub fn run_once(&self, id: &str) -> AppResult<ExecutionSample> {
        let descriptor = self.registry.get(id)?;
        let sample = TimedExecutor::execute(descriptor)?;

        tracing::debug!(
            strategy = %id,
            elapsed_ms = sample.elapsed_ms,
            output_bytes = sample.output.len(),
            "Strategy executed"
        );

        Ok(sample)
    }

    /// Benchmark every registered strategy `iterations` times.
    ///
    /// Summaries come back in registration order. A failure in any iteration
    /// aborts the whole run; no partial result set is ever returned.
    pub fn run_all(&self, iterations: u32) -> AppResult<Vec<StrategySummary>> {
        self.check_iterations(iterations)?;

        let started = Instant::now();
        let mut collector = MetricsCollector::with_capacity(iterations);
        let mut summaries = Vec::with_capacity(self.registry.len());

        for descriptor in self.registry.list() {
            collector.clear();
            for _ in 0..iterations {
                collector.add_sample(TimedExecutor::execute_discarding(descriptor)?);
            }

            let summary = collector
                .summarize(&descriptor.id, &descriptor.name)
                .ok_or_else(|| anyhow::anyhow!("no samples collected for {}", descriptor.id))?;

            tracing::debug!(
                strategy = %descriptor.id,
                iterations,
                mean_ms = summary.mean_ms,
                min_ms = summary.min_ms,
                max_ms = summary.max_ms,
                "Strategy benchmarked"
            );
            summaries.push(summary);
        }

        tracing::info!(
            strategies = summaries.len(),
            iterations,
            took = %format_duration(started.elapsed()),
            "Benchmark run completed"
        );

        Ok(summaries)
    }

    fn check_iterations(&self, iterations: u32) -> AppResult<()> {
        if iterations == 0 {
            return Err(AppError::InvalidConfiguration(
                "iterations must be at least 1".to_string(),
            ));
        }
        if iterations > self.max_iterations {
            return Err(AppError::InvalidConfiguration(format!(
                "iterations must not exceed {}",
                self.max_iterations
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::strategies::{builtin_registry, StrategyDescriptor, StrategyError};

    fn runner_with(strategies: Vec<StrategyDescriptor>) -> BenchmarkRunner {
        let mut registry = StrategyRegistry::new();
        for strategy in strategies {
            registry.register(strategy).unwrap();
        }
        BenchmarkRunner::new(Arc::new(registry))
    }

    #[test]
    fn test_run_once_returns_exact_output() {
        let runner = BenchmarkRunner::new(Arc::new(builtin_registry(5).unwrap()));
        let sample = runner.run_once("classic").unwrap();
        assert_eq!(sample.output, "1<br>2<br>Fizz<br>4<br>Buzz<br>");
        assert!(sample.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_run_once_unknown_strategy() {
        let runner = BenchmarkRunner::new(Arc::new(builtin_registry(5).unwrap()));
        assert!(matches!(
            runner.run_once("nonexistent"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_run_all_zero_iterations() {
        let runner = BenchmarkRunner::new(Arc::new(builtin_registry(5).unwrap()));
        assert!(matches!(
            runner.run_all(0),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_run_all_respects_cap() {
        let runner =
            BenchmarkRunner::new(Arc::new(builtin_registry(5).unwrap())).with_max_iterations(10);
        assert!(runner.run_all(10).is_ok());
        assert!(matches!(
            runner.run_all(11),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_run_all_covers_every_strategy_in_order() {
        let registry = Arc::new(builtin_registry(30).unwrap());
        let runner = BenchmarkRunner::new(registry.clone());

        let summaries = runner.run_all(3).unwrap();
        assert_eq!(summaries.len(), registry.len());
        for (summary, descriptor) in summaries.iter().zip(registry.list()) {
            assert_eq!(summary.strategy_id, descriptor.id);
            assert_eq!(summary.sample_count, 3);
            assert!(summary.min_ms <= summary.mean_ms && summary.mean_ms <= summary.max_ms);
        }
    }

    #[test]
    fn test_run_all_invokes_each_strategy_iterations_times() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let runner = runner_with(vec![StrategyDescriptor::new("count", "Count", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })]);

        runner.run_all(25).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 25);
    }

    #[test]
    fn test_run_all_aborts_on_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let runner = runner_with(vec![
            StrategyDescriptor::new("ok", "Ok", |_| Ok(())),
            StrategyDescriptor::new("flaky", "Flaky", move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 2 {
                    return Err(StrategyError::Failed("third call fails".into()));
                }
                Ok(())
            }),
            StrategyDescriptor::new("after", "After", |_| Ok(())),
        ]);

        match runner.run_all(5) {
            Err(AppError::Execution { strategy_id, .. }) => assert_eq!(strategy_id, "flaky"),
            other => panic!("expected execution error, got {:?}", other.map(|s| s.len())),
        }
        // No retry after the failing iteration
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
