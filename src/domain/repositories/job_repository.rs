//! Repository trait for job posting data access.

use crate::domain::entities::Job;
use crate::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Repository interface for the `jobs` collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoJobRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`; integration tests supply an
///   in-memory implementation (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a job document verbatim and returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, job: Job) -> Result<ObjectId, AppError>;

    /// Lists jobs, optionally filtered by exact `hr_email` match.
    ///
    /// Unbounded result size — pagination is out of scope.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list<'a>(&self, hr_email: Option<&'a str>) -> Result<Vec<Job>, AppError>;

    /// Finds a single job by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Job))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Job>, AppError>;

    /// Fetches all jobs whose id is in `ids`, in one batch query.
    ///
    /// Ids with no matching document are silently absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Job>, AppError>;

    /// Returns whether a job with the given id exists.
    ///
    /// Used for the referential check when an application is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: ObjectId) -> Result<bool, AppError>;
}
