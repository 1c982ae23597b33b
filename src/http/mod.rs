//! HTTP surface of the probe service.
//!
//! # Data Flow
//! ```text
//! GET /ping
//!     → auth middleware (403 on missing/invalid credential)
//!     → handlers.rs (query validation, probe, serialization)
//!     → JSON response
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
