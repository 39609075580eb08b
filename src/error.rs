//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{config::ConfigError, strategies::StrategyError};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Registry errors
    #[error("Strategy not found: {0}")]
    NotFound(String),

    #[error("Strategy already registered: {0}")]
    DuplicateId(String),

    // Run parameter errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Benchmark errors
    #[error("Strategy '{strategy_id}' failed: {source}")]
    Execution {
        strategy_id: String,
        partial_output: String,
        #[source]
        source: StrategyError,
    },

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Execution { .. } => "EXECUTION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateId(_) | Self::InvalidConfiguration(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Execution { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to a client
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {}", e);
                "The server is misconfigured".to_string()
            }
            _ => self.to_string(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Execution {
                strategy_id,
                partial_output,
                ..
            } => Some(serde_json::json!({
                "strategy_id": strategy_id,
                "partial_output": partial_output,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message: self.public_message(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(anyhow::Error::new(err).context("benchmark task did not complete"))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("nope".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidConfiguration("iterations".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let execution = AppError::Execution {
            strategy_id: "classic".into(),
            partial_output: "1<br>".into(),
            source: StrategyError::Failed("boom".into()),
        };
        assert_eq!(execution.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(execution.error_code(), "EXECUTION_ERROR");
    }

    #[test]
    fn test_execution_message_names_strategy() {
        let err = AppError::Execution {
            strategy_id: "fast".into(),
            partial_output: String::new(),
            source: StrategyError::Failed("counter overflow".into()),
        };
        assert_eq!(err.to_string(), "Strategy 'fast' failed: counter overflow");
        let details = err.details().unwrap();
        assert_eq!(details["strategy_id"], "fast");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::Internal(anyhow::anyhow!("thread pool gone"));
        assert_eq!(err.public_message(), "An internal error occurred");
    }
}
