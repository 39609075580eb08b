//! Timed execution of a single strategy invocation

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::ExecutionSample,
    strategies::{StrategyDescriptor, StrategyError},
    utils::time::duration_to_millis,
};

/// Sink used while benchmarking: counts bytes and keeps nothing.
#[derive(Debug, Default)]
pub struct DiscardSink {
    bytes: usize,
}

impl DiscardSink {
    pub fn bytes_written(&self) -> usize {
        self.bytes
    }
}

impl fmt::Write for DiscardSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes += black_box(s).len();
        Ok(())
    }
}

/// Runs one strategy once and measures the wall clock time it took.
///
/// Only the strategy body is inside the measured window. Every call gets a
/// fresh sink so nothing allocated by the previous sample is released while
/// the clock is running.
pub struct TimedExecutor;

impl TimedExecutor {
    /// Execute `descriptor`, capturing everything it prints.
    pub fn execute(descriptor: &StrategyDescriptor) -> AppResult<ExecutionSample> {
        let mut output = String::new();
        match Self::measure(descriptor, &mut output) {
            Ok(elapsed_ms) => Ok(ExecutionSample { elapsed_ms, output }),
            Err(source) => Err(execution_error(descriptor, output, source)),
        }
    }

    /// Execute `descriptor` with its output thrown away, returning milliseconds.
    pub fn execute_discarding(descriptor: &StrategyDescriptor) -> AppResult<f64> {
        let mut sink = DiscardSink::default();
        let elapsed_ms = Self::measure(descriptor, &mut sink)
            .map_err(|source| execution_error(descriptor, String::new(), source))?;
        black_box(sink.bytes_written());
        Ok(elapsed_ms)
    }

    fn measure(
        descriptor: &StrategyDescriptor,
        sink: &mut dyn fmt::Write,
    ) -> Result<f64, StrategyError> {
        let start = Instant::now();
        let result = descriptor.run(sink);
        let elapsed = start.elapsed();
        result?;
        Ok(duration_to_millis(elapsed))
    }
}

fn execution_error(
    descriptor: &StrategyDescriptor,
    partial_output: String,
    source: StrategyError,
) -> AppError {
    tracing::warn!(
        strategy = %descriptor.id,
        error = %source,
        "Strategy failed during timed execution"
    );
    AppError::Execution {
        strategy_id: descriptor.id.clone(),
        partial_output,
        source,
    }
}
