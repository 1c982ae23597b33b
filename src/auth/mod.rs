//! Request authorization.
//!
//! A single shared-secret credential, configured at startup and compared
//! byte-for-byte against the `Authorization` header. No hashing, no expiry,
//! no timing side-channel mitigation.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// Shared-secret authorizer.
///
/// Holds the credential configured at process start; immutable thereafter.
#[derive(Debug, Clone)]
pub struct Authorizer {
    credential: String,
}

impl Authorizer {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
        }
    }

    /// Returns true when exactly one `Authorization` value is present and it
    /// equals the configured credential.
    ///
    /// Zero values, repeated values, and mismatches all return false; absence
    /// of proof is simply "not authorized", never an error.
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let mut values = headers.get_all(header::AUTHORIZATION).iter();
        match (values.next(), values.next()) {
            (Some(value), None) => value.as_bytes() == self.credential.as_bytes(),
            _ => false,
        }
    }
}

/// Middleware guarding the probe endpoint.
///
/// Rejects unauthorized requests with 403 and an empty body before any
/// further work happens.
pub async fn require_credential(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if state.authorizer.authorize(request.headers()) {
        Ok(next.run(request).await)
    } else {
        tracing::debug!("Rejected request: missing or invalid credential");
        Err(StatusCode::FORBIDDEN)
    }
}
