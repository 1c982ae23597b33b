//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (AUTH_TOKEN, EGRESS_ADDRESS)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the credential and egress address
//!   never change for the lifetime of the process
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ProbeConfig;
pub use schema::ServiceConfig;
