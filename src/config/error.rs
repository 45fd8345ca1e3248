//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Consistency threshold must be within (0, 1]")]
    InvalidConsistencyThreshold,

    #[error("Weight-sum tolerance must be within (0, 0.1)")]
    InvalidWeightSumTolerance,
}
