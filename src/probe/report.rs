//! Probe result shaping.

use serde::Serialize;

/// Outcome of a single reachability probe.
///
/// `ping` is the connection-establishment latency in whole milliseconds.
/// When the target is unreachable, `ping` is zero: the absence of a
/// measurement, not a zero-duration connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub reachable: bool,
    pub ping: u64,
}

impl ProbeReport {
    /// Report for a failed dial, whatever the cause.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ping: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_shape() {
        let report = ProbeReport {
            reachable: true,
            ping: 12,
        };
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            serde_json::json!({"reachable": true, "ping": 12})
        );
    }

    #[test]
    fn unreachable_report_has_zero_ping() {
        assert_eq!(
            serde_json::to_value(ProbeReport::unreachable()).unwrap(),
            serde_json::json!({"reachable": false, "ping": 0})
        );
    }
}
