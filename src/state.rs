//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ApplicationService, AuthService, JobService};

/// Handles shared across all requests.
///
/// Services are constructed once in [`crate::server::run`] and injected
/// here; nothing reaches for module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<JobService>,
    pub application_service: Arc<ApplicationService>,
    pub auth_service: Arc<AuthService>,
    /// Whether the token cookie carries the `Secure` flag.
    pub cookie_secure: bool,
}
