//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Root configuration for the probe service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Authorization settings.
    pub auth: AuthConfig,

    /// Outbound probe settings.
    pub probe: ProbeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8040").
    pub bind_address: String,

    /// Total request timeout in seconds. Must exceed the dial timeout so a
    /// slow probe still produces a response rather than a cancelled request.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8040".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Authorization configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret compared byte-for-byte against the Authorization header.
    /// Overridable via the AUTH_TOKEN environment variable.
    pub shared_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_secret: String::new(),
        }
    }
}

/// Outbound probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Local IPv4 address used as the source of every outbound probe.
    /// "0.0.0.0" leaves the choice to the OS. Overridable via the
    /// EGRESS_ADDRESS environment variable.
    pub egress_address: Ipv4Addr,

    /// Connection-establishment timeout in seconds.
    pub dial_timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            egress_address: Ipv4Addr::UNSPECIFIED,
            dial_timeout_secs: 4,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
