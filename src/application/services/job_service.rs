//! Job listing and creation service.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::domain::entities::Job;
use crate::domain::repositories::{ApplicationRepository, JobRepository};
use crate::error::AppError;

/// Service for listing and creating job postings.
///
/// Holds the application repository as well: the employer listing joins a
/// per-job application count onto each posting.
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    applications: Arc<dyn ApplicationRepository>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(jobs: Arc<dyn JobRepository>, applications: Arc<dyn ApplicationRepository>) -> Self {
        Self { jobs, applications }
    }

    /// Lists all jobs, optionally filtered by employer email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_jobs(&self, hr_email: Option<&str>) -> Result<Vec<Job>, AppError> {
        self.jobs.list(hr_email).await
    }

    /// Lists an employer's jobs with the number of applications each has
    /// received.
    ///
    /// Counts come from a single grouped query over the whole id set; the
    /// result pairs every job with its count (zero when no applications
    /// reference it).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_jobs_with_application_counts(
        &self,
        hr_email: &str,
    ) -> Result<Vec<(Job, u64)>, AppError> {
        let jobs = self.jobs.list(Some(hr_email)).await?;

        let ids: Vec<ObjectId> = jobs.iter().filter_map(|job| job.id).collect();
        let counts = self.applications.count_by_job_ids(&ids).await?;

        Ok(jobs
            .into_iter()
            .map(|job| {
                let count = job
                    .id
                    .and_then(|id| counts.get(&id).copied())
                    .unwrap_or(0);
                (job, count)
            })
            .collect())
    }

    /// Retrieves one job by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no job carries the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_job(&self, id: ObjectId) -> Result<Job, AppError> {
        self.jobs.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("Job not found", json!({ "id": id.to_hex() }))
        })
    }

    /// Inserts a new job posting as submitted and returns its id.
    ///
    /// No field validation beyond the entity shape — postings are
    /// schema-less by contract.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_job(&self, job: Job) -> Result<ObjectId, AppError> {
        self.jobs.insert(job).await
    }
}
