//! Handler for the liveness endpoint.

/// Plain-text liveness probe.
///
/// # Endpoint
///
/// `GET /`
pub async fn liveness_handler() -> &'static str {
    "CareerBridge server is running"
}
