//! DTOs for job endpoints.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Job;

/// Query for `GET /jobs`; the filter is optional.
#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub email: Option<String>,
}

/// Query for employer-scoped listings; the email is required.
#[derive(Debug, Deserialize)]
pub struct EmployerQuery {
    pub email: String,
}

/// Wire representation of a job posting.
///
/// Ids are 24-character hex strings; extra posting fields flatten back out
/// exactly as stored.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub hr_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        rename = "applicationDeadline",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_deadline: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.map(|id| id.to_hex()),
            hr_email: job.hr_email,
            company: job.company,
            title: job.title,
            category: job.category,
            company_logo: job.company_logo,
            status: job.status,
            application_deadline: job.application_deadline,
            extra: job.extra,
        }
    }
}

/// A job plus the number of applications referencing it.
#[derive(Debug, Serialize)]
pub struct JobWithCountResponse {
    #[serde(flatten)]
    pub job: JobResponse,
    pub application_count: u64,
}
