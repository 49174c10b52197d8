//! Application submission, listing, and status update service.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::domain::entities::{Job, JobApplication, StatusUpdate};
use crate::domain::repositories::{ApplicationRepository, JobRepository};
use crate::error::AppError;

/// Service for job applications.
///
/// The applicant listing performs the denormalizing join against the jobs
/// collection in one batched lookup; a dangling job reference yields the
/// application without the joined fields, never an error.
pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(applications: Arc<dyn ApplicationRepository>, jobs: Arc<dyn JobRepository>) -> Self {
        Self { applications, jobs }
    }

    /// Lists an applicant's applications, each paired with its referenced
    /// job when that job still exists.
    ///
    /// All referenced jobs are fetched in a single `$in` batch; per-item
    /// lookups would fan out one query per application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_applicant(
        &self,
        applicant: &str,
    ) -> Result<Vec<(JobApplication, Option<Job>)>, AppError> {
        let applications = self.applications.list_by_applicant(applicant).await?;

        let mut job_ids: Vec<ObjectId> =
            applications.iter().map(|application| application.job_id).collect();
        job_ids.sort_unstable();
        job_ids.dedup();

        let jobs: HashMap<ObjectId, Job> = self
            .jobs
            .find_by_ids(&job_ids)
            .await?
            .into_iter()
            .filter_map(|job| job.id.map(|id| (id, job)))
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| {
                let job = jobs.get(&application.job_id).cloned();
                (application, job)
            })
            .collect())
    }

    /// Lists all applications referencing one job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_job(&self, job_id: ObjectId) -> Result<Vec<JobApplication>, AppError> {
        self.applications.list_by_job(job_id).await
    }

    /// Submits a new application.
    ///
    /// The referenced job must exist at write time; later deletion of the
    /// job is still tolerated on read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `job_id` references no job.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn submit(&self, application: JobApplication) -> Result<ObjectId, AppError> {
        if !self.jobs.exists(application.job_id).await? {
            return Err(AppError::bad_request(
                "Referenced job does not exist",
                json!({ "jobId": application.job_id.to_hex() }),
            ));
        }

        self.applications.insert(application).await
    }

    /// Sets the status of one application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no application carries the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<StatusUpdate, AppError> {
        let update = self.applications.set_status(id, status).await?;

        if update.matched == 0 {
            return Err(AppError::not_found(
                "Application not found",
                json!({ "id": id.to_hex() }),
            ));
        }

        Ok(update)
    }
}
