//! MongoDB-backed repository implementations.

pub mod mongo_application_repository;
pub mod mongo_job_repository;

pub use mongo_application_repository::MongoApplicationRepository;
pub use mongo_job_repository::MongoJobRepository;
