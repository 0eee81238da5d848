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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Gateway endpoint must be an absolute http(s) URL")]
    InvalidEndpointUrl,

    #[error("Gateway endpoint must use HTTPS in live mode")]
    EndpointMustBeHttps,

    #[error("Key version must be at least 1")]
    InvalidKeyVersion,
}
