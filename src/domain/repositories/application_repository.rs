//! Repository trait for job application data access.

use crate::domain::entities::{JobApplication, StatusUpdate};
use crate::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;

/// Repository interface for the `applications` collection.
///
/// Counting is batched ([`Self::count_by_job_ids`]) so employer listings run
/// one grouped query instead of one count per job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoApplicationRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`; integration tests supply an
///   in-memory implementation (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Inserts an application document verbatim and returns the
    /// store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, application: JobApplication) -> Result<ObjectId, AppError>;

    /// Lists applications submitted by the given applicant email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_applicant(&self, applicant: &str) -> Result<Vec<JobApplication>, AppError>;

    /// Lists applications referencing the given job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_job(&self, job_id: ObjectId) -> Result<Vec<JobApplication>, AppError>;

    /// Counts applications per job for a set of job ids, in one query.
    ///
    /// Jobs with no applications are absent from the map; callers treat a
    /// missing key as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_job_ids(
        &self,
        job_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, AppError>;

    /// Sets the `status` field of one application.
    ///
    /// Returns the matched/modified counts; a matched count of zero means the
    /// id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_status(&self, id: ObjectId, status: &str) -> Result<StatusUpdate, AppError>;
}
