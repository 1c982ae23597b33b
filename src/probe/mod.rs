//! Outbound reachability probing subsystem.
//!
//! # Data Flow
//! ```text
//! (host, port) strings from the handler
//!     → prober.rs (resolve, bounded dial from the egress address)
//!     → report.rs (reachable + latency, or the uniform negative report)
//!     → serialized by the handler
//! ```
//!
//! # Design Decisions
//! - One dial attempt per invocation, no retries, no result caching
//! - Every failure mode folds into the same negative report; targets that
//!   are down are routine, not exceptional
//! - The timeout is enforced on the dial future itself, not by an external
//!   watchdog

pub mod prober;
pub mod report;

pub use prober::Prober;
pub use report::ProbeReport;
