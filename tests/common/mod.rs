//! Shared utilities for integration tests.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpListener;

use egress_probe::config::ServiceConfig;
use egress_probe::http::HttpServer;
use egress_probe::lifecycle::Shutdown;

/// Start the probe service on `addr` with the given shared secret.
///
/// The egress address is pinned to loopback so probes can reach the
/// loopback targets the tests stand up. Returns the shutdown coordinator
/// so tests can stop the server when done.
pub async fn start_service(addr: SocketAddr, secret: &str) -> Shutdown {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.auth.shared_secret = secret.to_string();
    config.probe.egress_address = Ipv4Addr::LOCALHOST;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config);
    let listener = TcpListener::bind(addr).await.unwrap();
    let receiver = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Start a TCP listener that accepts and immediately drops connections,
/// standing in for a reachable probe target.
#[allow(dead_code)]
pub async fn start_probe_target(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => drop(socket),
                Err(_) => break,
            }
        }
    });
}

/// Find a loopback port with nothing listening on it.
#[allow(dead_code)]
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
