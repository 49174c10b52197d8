//! API route configuration.

use crate::api::handlers::{
    applications_by_job_handler, create_application_handler, create_job_handler, get_job_handler,
    issue_token_handler, jobs_with_counts_handler, list_applications_handler, list_jobs_handler,
    liveness_handler, update_application_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `GET   /`                            - Liveness probe (plain text)
/// - `POST  /jwt`                         - Issue token, set cookie
/// - `GET   /jobs`                        - List jobs (`?email=` filter optional)
/// - `POST  /jobs`                        - Create a job posting
/// - `GET   /jobs/applications`           - Employer's jobs with application counts
/// - `GET   /jobs/{id}`                   - Fetch one job
/// - `POST  /applications`                - Submit an application
/// - `GET   /applications/jobs/{job_id}`  - Applications for one job
/// - `PATCH /applications/{id}`           - Update application status
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/jwt", post(issue_token_handler))
        .route("/jobs", get(list_jobs_handler).post(create_job_handler))
        .route("/jobs/applications", get(jobs_with_counts_handler))
        .route("/jobs/{id}", get(get_job_handler))
        .route("/applications", post(create_application_handler))
        .route(
            "/applications/jobs/{job_id}",
            get(applications_by_job_handler),
        )
        .route(
            "/applications/{id}",
            patch(update_application_status_handler),
        )
}

/// Routes behind the cookie-JWT gate ([`crate::api::middleware::auth`]).
///
/// # Endpoints
///
/// - `GET /applications` - Applicant's applications, enriched with job fields
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/applications", get(list_applications_handler))
}
