//! Handlers for job endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::acks::InsertAck;
use crate::api::dto::jobs::{EmployerQuery, JobListQuery, JobResponse, JobWithCountResponse};
use crate::domain::entities::Job;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::object_id::parse_object_id;

/// Lists all jobs, optionally filtered by employer email.
///
/// # Endpoint
///
/// `GET /jobs?email=hr@acme.test`
///
/// Result size is unbounded; pagination is out of scope.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let jobs = state.job_service.list_jobs(query.email.as_deref()).await?;

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Lists an employer's jobs with per-job application counts.
///
/// # Endpoint
///
/// `GET /jobs/applications?email=hr@acme.test`
///
/// Counts come from one grouped query over the employer's job ids.
pub async fn jobs_with_counts_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployerQuery>,
) -> Result<Json<Vec<JobWithCountResponse>>, AppError> {
    let jobs = state
        .job_service
        .list_jobs_with_application_counts(&query.email)
        .await?;

    Ok(Json(
        jobs.into_iter()
            .map(|(job, application_count)| JobWithCountResponse {
                job: JobResponse::from(job),
                application_count,
            })
            .collect(),
    ))
}

/// Fetches one job by id.
///
/// # Endpoint
///
/// `GET /jobs/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed id, 404 when no job carries it.
pub async fn get_job_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<JobResponse>, AppError> {
    let id = parse_object_id(&id)?;
    let job = state.job_service.get_job(id).await?;

    Ok(Json(JobResponse::from(job)))
}

/// Creates a job posting from the request body as submitted.
///
/// # Endpoint
///
/// `POST /jobs`
///
/// Unknown fields are stored verbatim; no field validation is performed.
pub async fn create_job_handler(
    State(state): State<AppState>,
    Json(job): Json<Job>,
) -> Result<(StatusCode, Json<InsertAck>), AppError> {
    let id = state.job_service.create_job(job).await?;

    Ok((StatusCode::CREATED, Json(InsertAck::new(id))))
}
