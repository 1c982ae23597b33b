//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router and wire up middleware (trace, timeout, auth)
//! - Share the Authorizer and Prober with handlers
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::{require_credential, Authorizer};
use crate::config::ServiceConfig;
use crate::http::handlers::ping_handler;
use crate::probe::Prober;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub authorizer: Arc<Authorizer>,
    pub prober: Arc<Prober>,
}

/// HTTP server for the probe service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        let authorizer = Authorizer::new(config.auth.shared_secret.clone());
        let prober = Prober::new(
            config.probe.egress_address,
            Duration::from_secs(config.probe.dial_timeout_secs),
        );

        let state = AppState {
            authorizer: Arc::new(authorizer),
            prober: Arc::new(prober),
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/ping", get(ping_handler))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_credential,
            ))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops gracefully on Ctrl+C or when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or an explicit shutdown broadcast, whichever comes first.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
