//! Benchmark execution engine
//!
//! The engine is layered bottom-up:
//!
//! 1. **Timed Executor** (`executor.rs`): runs a strategy once under a
//!    monotonic clock, either capturing or discarding its output.
//! 2. **Benchmark Runner** (`runner.rs`): single runs and full benchmarks
//!    over every registered strategy.
//! 3. **Metrics** (`metrics.rs`): reduces samples to mean, min and max.
//! 4. **Ranking** (`ranking.rs`): per-metric ranks, rank-sum score and
//!    overall rank.

pub mod executor;
pub mod metrics;
pub mod ranking;
pub mod runner;

pub use executor::TimedExecutor;
pub use metrics::MetricsCollector;
pub use runner::BenchmarkRunner;
