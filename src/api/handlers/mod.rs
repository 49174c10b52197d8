//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod applications;
pub mod health;
pub mod jobs;
pub mod token;

pub use applications::{
    applications_by_job_handler, create_application_handler, list_applications_handler,
    update_application_status_handler,
};
pub use health::liveness_handler;
pub use jobs::{create_job_handler, get_job_handler, jobs_with_counts_handler, list_jobs_handler};
pub use token::issue_token_handler;
