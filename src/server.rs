//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection lifecycle, service construction, and the
//! Axum server.

use crate::application::services::{ApplicationService, AuthService, JobService};
use crate::config::Config;
use crate::domain::entities::{Job, JobApplication};
use crate::infrastructure::persistence::{MongoApplicationRepository, MongoJobRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (connection verified with a ping)
/// - Repositories over the `jobs` and `applications` collections
/// - Services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or the startup ping fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.database_url).await?;
    let database = client.database(&config.database_name);

    // The driver connects lazily; ping so a bad URI fails here, not on the
    // first request.
    database.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to database");

    let jobs: mongodb::Collection<Job> = database.collection("jobs");
    let applications: mongodb::Collection<JobApplication> = database.collection("applications");

    let job_repository = Arc::new(MongoJobRepository::new(jobs));
    let application_repository = Arc::new(MongoApplicationRepository::new(applications));

    let auth_service = Arc::new(AuthService::new(
        &config.jwt_secret,
        config.token_ttl_seconds,
    ));
    let job_service = Arc::new(JobService::new(
        job_repository.clone(),
        application_repository.clone(),
    ));
    let application_service = Arc::new(ApplicationService::new(
        application_repository,
        job_repository,
    ));

    let state = AppState {
        job_service,
        application_service,
        auth_service,
        cookie_secure: config.cookie_secure,
    };

    let app = app_router(state, &config.cors_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
