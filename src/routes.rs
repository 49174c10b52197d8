//! Top-level router configuration.
//!
//! # Route Structure
//!
//! All routes live at the root (see [`crate::api::routes`]); the one
//! protected route (`GET /applications`) carries the cookie-JWT middleware
//! and is merged with the public set — `POST /applications` on the same path
//! stays open.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Credentialed allow-list for the configured caller origins
//! - **Authentication** - Cookie JWT on the protected route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed caller origins; credentialed unless `*`
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
