//! Cross-origin policy.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Builds the CORS layer for the configured allow-list.
///
/// Explicit origins get credentialed requests (the token cookie must travel
/// cross-origin); tower-http rejects credentials combined with wildcards, so
/// a `*` entry switches to a credential-less permissive policy instead.
pub fn layer(origins: &[String]) -> CorsLayer {
    let allowed_methods = [Method::GET, Method::POST, Method::PATCH, Method::OPTIONS];
    let allowed_headers = [header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN];

    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
            .allow_origin(origins)
    }
}
