//! Business logic services

pub mod benchmark_service;

pub use benchmark_service::{BenchmarkReport, BenchmarkService};
