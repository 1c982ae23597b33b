//! Lifecycle management subsystem.
//!
//! Startup ordering lives in `main`: config first, then the server, then
//! the listener. Shutdown fans out through [`shutdown::Shutdown`]; the
//! server also reacts to Ctrl+C directly.

pub mod shutdown;

pub use shutdown::Shutdown;
