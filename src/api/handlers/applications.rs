//! Handlers for application endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::acks::{InsertAck, UpdateAck};
use crate::api::dto::applications::{
    ApplicantQuery, ApplicationResponse, NewApplicationRequest, StatusUpdateRequest,
};
use crate::application::services::Claims;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::object_id::parse_object_id;

/// Lists the authenticated applicant's applications, enriched with fields
/// from each referenced job.
///
/// # Endpoint
///
/// `GET /applications?email=dev@mail.test` (cookie token required)
///
/// The query email must match the token's email claim; the comparison lives
/// in [`crate::application::services::AuthService::authorize_self`].
///
/// # Errors
///
/// Returns 401 without a valid token (middleware), 403 on identity mismatch.
pub async fn list_applications_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ApplicantQuery>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    state.auth_service.authorize_self(&claims, &query.email)?;

    let applications = state
        .application_service
        .list_for_applicant(&query.email)
        .await?;

    Ok(Json(
        applications
            .into_iter()
            .map(|(application, job)| ApplicationResponse::from_parts(application, job.as_ref()))
            .collect(),
    ))
}

/// Lists all applications referencing one job.
///
/// # Endpoint
///
/// `GET /applications/jobs/{job_id}`
///
/// Unprotected, as in the system contract.
pub async fn applications_by_job_handler(
    Path(job_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    let job_id = parse_object_id(&job_id)?;
    let applications = state.application_service.list_for_job(job_id).await?;

    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Submits a new application.
///
/// # Endpoint
///
/// `POST /applications`
///
/// # Errors
///
/// Returns 400 when `jobId` is malformed or references no existing job.
pub async fn create_application_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewApplicationRequest>,
) -> Result<(StatusCode, Json<InsertAck>), AppError> {
    let application = payload.into_entity()?;
    let id = state.application_service.submit(application).await?;

    Ok((StatusCode::CREATED, Json(InsertAck::new(id))))
}

/// Updates one application's status.
///
/// # Endpoint
///
/// `PATCH /applications/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed id, 404 when no application carries it.
pub async fn update_application_status_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<StatusUpdateRequest>,
) -> Result<Json<UpdateAck>, AppError> {
    let id = parse_object_id(&id)?;
    let update = state
        .application_service
        .set_status(id, &payload.status)
        .await?;

    Ok(Json(UpdateAck::from(update)))
}
