//! Repository traits decoupling services from the storage backend.

pub mod application_repository;
pub mod job_repository;

pub use application_repository::ApplicationRepository;
pub use job_repository::JobRepository;

#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
