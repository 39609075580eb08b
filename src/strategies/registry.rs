//! Ordered strategy registry.
//!
//! Registration order is significant: it is the display order of the catalog
//! and the tie-break order used by the ranking engine.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

use super::StrategyDescriptor;

/// Registry of strategies keyed by id, iterated in registration order.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: Vec<StrategyDescriptor>,
    index: HashMap<String, usize>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy.
    ///
    /// Fails with [`AppError::DuplicateId`] when the id is already taken.
    pub fn register(&mut self, descriptor: StrategyDescriptor) -> AppResult<()> {
        if self.index.contains_key(&descriptor.id) {
            return Err(AppError::DuplicateId(descriptor.id));
        }
        self.index
            .insert(descriptor.id.clone(), self.strategies.len());
        self.strategies.push(descriptor);
        Ok(())
    }

    /// Look up a strategy by id.
    pub fn get(&self, id: &str) -> AppResult<&StrategyDescriptor> {
        self.index
            .get(id)
            .map(|&position| &self.strategies[position])
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Check if a strategy is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Zero-based registration position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All strategies in registration order.
    pub fn list(&self) -> &[StrategyDescriptor] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
