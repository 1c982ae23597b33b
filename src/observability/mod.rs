//! Observability subsystem.
//!
//! Structured logging via `tracing`; the HTTP access log comes from
//! `tower_http::trace::TraceLayer` wired up in the server. Probe outcomes
//! log at debug with the target as a structured field. Secret material is
//! never logged.

pub mod logging;
