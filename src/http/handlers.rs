//! Request handlers.

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;

/// Handler for `GET /ping`.
///
/// Requires exactly one `ip` and exactly one `port` query value; a
/// duplicated parameter is rejected the same as a missing one. Dial
/// failures are not errors here: they come back as a normal negative
/// report with status 200.
pub async fn ping_handler(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();

    let (ip, port) = match (single_value(&query, "ip"), single_value(&query, "port")) {
        (Some(ip), Some(port)) => (ip, port),
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    // A dropped request must not cancel an in-flight dial; the dial's own
    // timeout is its only bound.
    let prober = state.prober.clone();
    let report = match tokio::spawn(async move { prober.probe(&ip, &port).await }).await {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(error = %error, "Probe task failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match serde_json::to_vec(&report) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(error) => {
            tracing::error!(error = %error, "Failed to serialize probe report");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Extract the value of `key` from a query string, requiring it to appear
/// exactly once.
fn single_value(query: &str, key: &str) -> Option<String> {
    let mut found = None;
    for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
        if k == key {
            if found.is_some() {
                return None;
            }
            found = Some(v.into_owned());
        }
    }
    found
}
