//! Bounded, source-pinned TCP dialing.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use tokio::net::{lookup_host, TcpSocket, TcpStream};
use tokio::time;

use crate::probe::report::ProbeReport;

/// Performs single-shot TCP reachability checks from a fixed egress address.
///
/// The egress address and timeout are set at construction and shared
/// read-only by every probe invocation.
pub struct Prober {
    egress: SocketAddr,
    dial_timeout: Duration,
}

impl Prober {
    /// Create a prober that dials from `egress_address` (source port chosen
    /// by the OS) with the given connection-establishment timeout.
    pub fn new(egress_address: Ipv4Addr, dial_timeout: Duration) -> Self {
        Self {
            egress: SocketAddr::from((egress_address, 0)),
            dial_timeout,
        }
    }

    /// Probe `host:port` once.
    ///
    /// The timeout bounds the whole dial, name resolution included. On
    /// success the connection is closed immediately; the probe measures
    /// reachability and handshake latency only. Every failure mode folds
    /// into [`ProbeReport::unreachable`] and the cause is not surfaced to
    /// the caller.
    pub async fn probe(&self, host: &str, port: &str) -> ProbeReport {
        let target = format!("{}:{}", host, port);
        let started = Instant::now();

        match time::timeout(self.dial_timeout, self.dial(&target)).await {
            Ok(Ok(stream)) => {
                let latency_ms = started.elapsed().as_millis() as u64;
                // Reachability confirmed; the connection itself is not needed.
                drop(stream);
                tracing::debug!(target = %target, latency_ms, "Probe connected");
                ProbeReport {
                    reachable: true,
                    ping: latency_ms,
                }
            }
            Ok(Err(error)) => {
                tracing::debug!(target = %target, error = %error, "Probe failed");
                ProbeReport::unreachable()
            }
            Err(_) => {
                tracing::debug!(target = %target, timeout = ?self.dial_timeout, "Probe timed out");
                ProbeReport::unreachable()
            }
        }
    }

    /// Resolve the target and dial it over IPv4 from the egress address.
    async fn dial(&self, target: &str) -> io::Result<TcpStream> {
        let addr = lookup_host(target)
            .await?
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no IPv4 address for target"))?;

        let socket = TcpSocket::new_v4()?;
        socket.bind(self.egress)?;
        socket.connect(addr).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn loopback_prober() -> Prober {
        Prober::new(Ipv4Addr::LOCALHOST, Duration::from_secs(4))
    }

    #[tokio::test]
    async fn reports_reachable_for_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port().to_string();

        let report = loopback_prober().probe("127.0.0.1", &port).await;

        assert!(report.reachable);
    }

    #[tokio::test]
    async fn folds_refused_connection_into_unreachable() {
        // Bind and drop to find a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port().to_string();
        drop(listener);

        let report = loopback_prober().probe("127.0.0.1", &port).await;

        assert_eq!(report, ProbeReport::unreachable());
    }

    #[tokio::test]
    async fn folds_malformed_target_into_unreachable() {
        let prober = loopback_prober();

        assert_eq!(
            prober.probe("not a hostname", "80").await,
            ProbeReport::unreachable()
        );
        assert_eq!(
            prober.probe("127.0.0.1", "not-a-port").await,
            ProbeReport::unreachable()
        );
    }

    #[tokio::test]
    async fn bounds_dial_to_unresponsive_target() {
        // Reserved TEST-NET-1 address: never answers, so the dial runs into
        // the (shortened) timeout or an immediate route error. Either way the
        // report is the uniform negative one.
        let prober = Prober::new(Ipv4Addr::UNSPECIFIED, Duration::from_millis(100));
        let started = Instant::now();

        let report = prober.probe("192.0.2.1", "81").await;

        assert_eq!(report, ProbeReport::unreachable());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn repeated_probes_agree_on_reachability() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port().to_string();
        let prober = loopback_prober();

        let first = prober.probe("127.0.0.1", &port).await;
        let second = prober.probe("127.0.0.1", &port).await;

        assert_eq!(first.reachable, second.reachable);
    }
}
