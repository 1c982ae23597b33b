//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `auth.shared_secret`.
pub const AUTH_TOKEN_VAR: &str = "AUTH_TOKEN";

/// Environment variable overriding `probe.egress_address`.
pub const EGRESS_ADDRESS_VAR: &str = "EGRESS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for {name}")]
    Env { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration, apply environment overrides, and validate.
///
/// A missing file is not an error: deployments may configure the service
/// entirely through `AUTH_TOKEN` and `EGRESS_ADDRESS`.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        ServiceConfig::default()
    };

    apply_env_overrides(&mut config)?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

fn apply_env_overrides(config: &mut ServiceConfig) -> Result<(), ConfigError> {
    if let Ok(secret) = std::env::var(AUTH_TOKEN_VAR) {
        config.auth.shared_secret = secret;
    }

    if let Ok(address) = std::env::var(EGRESS_ADDRESS_VAR) {
        config.probe.egress_address = address.parse().map_err(|_| ConfigError::Env {
            name: EGRESS_ADDRESS_VAR,
            value: address,
        })?;
    }

    Ok(())
}
