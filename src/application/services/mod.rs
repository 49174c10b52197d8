//! Business logic services.

pub mod application_service;
pub mod auth_service;
pub mod job_service;

pub use application_service::ApplicationService;
pub use auth_service::{AuthService, Claims};
pub use job_service::JobService;
