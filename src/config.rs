//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BENCHMARK_ITERATIONS, DEFAULT_BENCHMARK_MAX_CONCURRENT,
    DEFAULT_BENCHMARK_MAX_ITERATIONS, DEFAULT_FIZZBUZZ_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub benchmark: BenchmarkConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub request_timeout_secs: u64,
    /// Directory with the browser client's assets, served at `/`
    pub static_dir: Option<PathBuf>,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

/// Benchmark execution configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Iterations per strategy when a request does not specify any
    pub iterations: u32,
    /// Largest iteration count a request may ask for
    pub max_iterations: u32,
    /// Measurements allowed in flight at once
    pub max_concurrent: usize,
    /// Upper bound N of the FizzBuzz sequence every strategy prints
    pub fizzbuzz_limit: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BENCHMARK_ITERATIONS,
            max_iterations: DEFAULT_BENCHMARK_MAX_ITERATIONS,
            max_concurrent: DEFAULT_BENCHMARK_MAX_CONCURRENT,
            fizzbuzz_limit: DEFAULT_FIZZBUZZ_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            benchmark: BenchmarkConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse()?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}

impl BenchmarkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            iterations: parse_var("BENCHMARK_ITERATIONS", DEFAULT_BENCHMARK_ITERATIONS)?,
            max_iterations: parse_var("BENCHMARK_MAX_ITERATIONS", DEFAULT_BENCHMARK_MAX_ITERATIONS)?,
            max_concurrent: parse_var("BENCHMARK_MAX_CONCURRENT", DEFAULT_BENCHMARK_MAX_CONCURRENT)?,
            fizzbuzz_limit: parse_var("FIZZBUZZ_LIMIT", DEFAULT_FIZZBUZZ_LIMIT)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the runner could never satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > self.max_iterations {
            return Err(ConfigError::InvalidValue("BENCHMARK_ITERATIONS".to_string()));
        }
        if self.max_concurrent == 0 {
            return Err(ConfigError::InvalidValue("BENCHMARK_MAX_CONCURRENT".to_string()));
        }
        if self.fizzbuzz_limit == 0 {
            return Err(ConfigError::InvalidValue("FIZZBUZZ_LIMIT".to_string()));
        }
        Ok(())
    }
}

/// Read `key` from the environment, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
