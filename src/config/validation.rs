//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config value
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("auth.shared_secret must not be empty")]
    EmptySecret,

    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.request_timeout_secs must exceed probe.dial_timeout_secs")]
    RequestTimeoutTooShort,

    #[error("probe.dial_timeout_secs must be greater than zero")]
    ZeroDialTimeout,
}

/// Check the configuration for semantic problems.
pub fn validate_config(config: &ServiceConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.auth.shared_secret.is_empty() {
        errors.push(ValidationError::EmptySecret);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.probe.dial_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDialTimeout);
    } else if config.listener.request_timeout_secs <= config.probe.dial_timeout_secs {
        errors.push(ValidationError::RequestTimeoutTooShort);
    }

    errors
}
