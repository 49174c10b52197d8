//! DTOs for application endpoints.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Job, JobApplication};
use crate::error::AppError;
use crate::utils::object_id::parse_object_id;

/// Query for the protected applicant listing; must match the token claim.
#[derive(Debug, Deserialize)]
pub struct ApplicantQuery {
    pub email: String,
}

/// Request body for `POST /applications`.
#[derive(Debug, Deserialize)]
pub struct NewApplicationRequest {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub applicant: String,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl NewApplicationRequest {
    /// Converts the wire shape into an entity, parsing the hex job id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `jobId` is not a valid hex id.
    pub fn into_entity(self) -> Result<JobApplication, AppError> {
        Ok(JobApplication {
            id: None,
            job_id: parse_object_id(&self.job_id)?,
            applicant: self.applicant,
            status: self.status,
            extra: self.extra,
        })
    }
}

/// Request body for `PATCH /applications/{id}`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Wire representation of an application, optionally enriched with fields
/// denormalized from its referenced job.
///
/// When the job resolves, `company`, `title`, `company_logo`, `category`,
/// `status`, and `applicationDeadline` are copied from it — `status` takes
/// the job's value. When the reference dangles, the application is returned
/// as stored, without the joined fields.
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub applicant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "applicationDeadline",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_deadline: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl ApplicationResponse {
    /// Builds the response from an application and its resolved job, if any.
    pub fn from_parts(application: JobApplication, job: Option<&Job>) -> Self {
        let status = match job {
            Some(job) => job.status.clone(),
            None => application.status,
        };

        Self {
            id: application.id.map(|id| id.to_hex()),
            job_id: application.job_id.to_hex(),
            applicant: application.applicant,
            status,
            company: job.and_then(|j| j.company.clone()),
            title: job.and_then(|j| j.title.clone()),
            company_logo: job.and_then(|j| j.company_logo.clone()),
            category: job.and_then(|j| j.category.clone()),
            application_deadline: job.and_then(|j| j.application_deadline.clone()),
            extra: application.extra,
        }
    }
}

impl From<JobApplication> for ApplicationResponse {
    fn from(application: JobApplication) -> Self {
        Self::from_parts(application, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn application() -> JobApplication {
        JobApplication {
            id: Some(ObjectId::new()),
            job_id: ObjectId::new(),
            applicant: "dev@mail.test".to_string(),
            status: Some("pending".to_string()),
            extra: Document::new(),
        }
    }

    #[test]
    fn test_enrichment_copies_job_fields() {
        let job = Job {
            id: Some(ObjectId::new()),
            hr_email: "hr@acme.test".to_string(),
            company: Some("Acme".to_string()),
            title: Some("Rust Engineer".to_string()),
            category: Some("engineering".to_string()),
            company_logo: Some("https://acme.test/logo.png".to_string()),
            status: Some("active".to_string()),
            application_deadline: Some("2026-12-31".to_string()),
            extra: Document::new(),
        };

        let response = ApplicationResponse::from_parts(application(), Some(&job));

        assert_eq!(response.company.as_deref(), Some("Acme"));
        assert_eq!(response.title.as_deref(), Some("Rust Engineer"));
        // The job's status shadows the application's own.
        assert_eq!(response.status.as_deref(), Some("active"));
        assert_eq!(response.application_deadline.as_deref(), Some("2026-12-31"));
    }

    #[test]
    fn test_dangling_reference_keeps_own_fields_only() {
        let response = ApplicationResponse::from_parts(application(), None);

        assert_eq!(response.status.as_deref(), Some("pending"));
        assert!(response.company.is_none());
        assert!(response.title.is_none());
        assert!(response.application_deadline.is_none());
    }

    #[test]
    fn test_new_application_rejects_bad_job_id() {
        let request = NewApplicationRequest {
            job_id: "nope".to_string(),
            applicant: "dev@mail.test".to_string(),
            status: None,
            extra: Document::new(),
        };

        assert!(request.into_entity().is_err());
    }
}
