//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{benchmark::BenchmarkRunner, config::Config, strategies::StrategyRegistry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Read-only strategy catalog
    registry: Arc<StrategyRegistry>,

    /// Gate keeping concurrent measurements from skewing each other
    measurement_permits: Arc<Semaphore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(registry: StrategyRegistry, config: Config) -> Self {
        let permits = config.benchmark.max_concurrent.max(1);
        Self {
            inner: Arc::new(AppStateInner {
                registry: Arc::new(registry),
                measurement_permits: Arc::new(Semaphore::new(permits)),
                config,
            }),
        }
    }

    /// Get a reference to the strategy registry
    pub fn registry(&self) -> &Arc<StrategyRegistry> {
        &self.inner.registry
    }

    /// Get a clone of the measurement semaphore
    pub fn measurement_permits(&self) -> Arc<Semaphore> {
        self.inner.measurement_permits.clone()
    }

    /// Build a runner over the registry, capped by the configured maximum
    pub fn runner(&self) -> BenchmarkRunner {
        BenchmarkRunner::new(self.inner.registry.clone())
            .with_max_iterations(self.inner.config.benchmark.max_iterations)
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
