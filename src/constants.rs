//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default outer request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Maximum accepted request body size in bytes (64 KB)
pub const MAX_REQUEST_BODY_SIZE: usize = 64 * 1024;

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default number of iterations per strategy for a full benchmark
pub const DEFAULT_BENCHMARK_ITERATIONS: u32 = 1000;

/// Upper bound on iterations a single request may ask for
pub const DEFAULT_BENCHMARK_MAX_ITERATIONS: u32 = 100_000;

/// Number of measurements allowed to run at the same time
pub const DEFAULT_BENCHMARK_MAX_CONCURRENT: usize = 1;

/// Default upper bound of the FizzBuzz sequence
pub const DEFAULT_FIZZBUZZ_LIMIT: u32 = 10_000;

/// Decimal places kept when timings leave the service
pub const TIMING_DECIMALS: u32 = 3;

/// Separator emitted after every label
pub const LINE_BREAK: &str = "<br>";

/// Strategy run when the legacy endpoint receives no `version`
pub const DEFAULT_STRATEGY_ID: &str = "classic";

// =============================================================================
// LEGACY FORM ACTIONS
// =============================================================================

/// Actions accepted by the form-encoded endpoint
pub mod actions {
    pub const RUN: &str = "run";
    pub const BENCHMARK: &str = "benchmark";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

/// Path of the form-encoded endpoint the browser client posts to
pub const LEGACY_API_PATH: &str = "/api.php";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum number of summaries accepted by the re-ranking endpoint
pub const MAX_RANKED_SUMMARIES: u64 = 256;
