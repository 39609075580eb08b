//! FizzBuzz strategies
//!
//! A strategy is a statically compiled unit of work that prints the FizzBuzz
//! sequence into a text sink. Strategies are looked up by id in a
//! [`StrategyRegistry`] that is built once at startup and never mutated.

pub mod builtin;
pub mod catalog;
pub mod registry;

pub use catalog::builtin_registry;
pub use registry::StrategyRegistry;

use std::fmt;
use std::sync::Arc;

/// Failure raised by a strategy while it runs
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("output sink rejected a write")]
    Write(#[from] fmt::Error),

    #[error("{0}")]
    Failed(String),
}

pub type StrategyResult = Result<(), StrategyError>;

/// Executable body of a strategy. It receives the sink it must print into.
pub type Executable = Arc<dyn Fn(&mut dyn fmt::Write) -> StrategyResult + Send + Sync>;

/// A registered strategy and its presentation metadata
#[derive(Clone)]
pub struct StrategyDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub complexity: String,
    /// Code listing shown next to the strategy; empty when none was attached
    pub source: String,
    executable: Executable,
}

impl StrategyDescriptor {
    /// Create a descriptor with empty description and an `O(n)` label
    pub fn new<F>(id: impl Into<String>, name: impl Into<String>, executable: F) -> Self
    where
        F: Fn(&mut dyn fmt::Write) -> StrategyResult + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            complexity: "O(n)".to_string(),
            source: String::new(),
            executable: Arc::new(executable),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Run the strategy once, printing into `out`
    pub fn run(&self, out: &mut dyn fmt::Write) -> StrategyResult {
        (self.executable)(out)
    }
}

impl fmt::Debug for StrategyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .finish_non_exhaustive()
    }
}
