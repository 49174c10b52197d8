#![allow(dead_code)]

use async_trait::async_trait;
use career_bridge::application::services::{ApplicationService, AuthService, JobService};
use career_bridge::domain::entities::{Job, JobApplication, StatusUpdate};
use career_bridge::domain::repositories::{ApplicationRepository, JobRepository};
use career_bridge::error::AppError;
use career_bridge::state::AppState;
use mongodb::bson::{Document, oid::ObjectId};
use serde_json::Map;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-access-secret";

/// In-memory stand-in for the `jobs` collection.
///
/// Lets handler tests run against real routing and services without a
/// MongoDB instance; ids are assigned on insert like the store would.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn insert(&self, mut job: Job) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        job.id = Some(id);
        self.jobs.lock().unwrap().push(job);
        Ok(id)
    }

    async fn list<'a>(&self, hr_email: Option<&'a str>) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter()
            .filter(|job| hr_email.is_none_or(|email| job.hr_email == email))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Job>, AppError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|job| job.id == Some(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter()
            .filter(|job| job.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, AppError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().any(|job| job.id == Some(id)))
    }
}

/// In-memory stand-in for the `applications` collection.
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<JobApplication>>,
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert(&self, mut application: JobApplication) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        application.id = Some(id);
        self.applications.lock().unwrap().push(application);
        Ok(id)
    }

    async fn list_by_applicant(&self, applicant: &str) -> Result<Vec<JobApplication>, AppError> {
        let applications = self.applications.lock().unwrap();
        Ok(applications
            .iter()
            .filter(|application| application.applicant == applicant)
            .cloned()
            .collect())
    }

    async fn list_by_job(&self, job_id: ObjectId) -> Result<Vec<JobApplication>, AppError> {
        let applications = self.applications.lock().unwrap();
        Ok(applications
            .iter()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn count_by_job_ids(
        &self,
        job_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, AppError> {
        let applications = self.applications.lock().unwrap();
        let mut counts = HashMap::new();
        for application in applications.iter() {
            if job_ids.contains(&application.job_id) {
                *counts.entry(application.job_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn set_status(&self, id: ObjectId, status: &str) -> Result<StatusUpdate, AppError> {
        let mut applications = self.applications.lock().unwrap();
        match applications
            .iter_mut()
            .find(|application| application.id == Some(id))
        {
            Some(application) => {
                let modified = application.status.as_deref() != Some(status);
                application.status = Some(status.to_string());
                Ok(StatusUpdate {
                    matched: 1,
                    modified: modified as u64,
                })
            }
            None => Ok(StatusUpdate {
                matched: 0,
                modified: 0,
            }),
        }
    }
}

pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryJobRepository>,
    Arc<InMemoryApplicationRepository>,
) {
    let job_repo = Arc::new(InMemoryJobRepository::default());
    let application_repo = Arc::new(InMemoryApplicationRepository::default());

    let job_service = Arc::new(JobService::new(job_repo.clone(), application_repo.clone()));
    let application_service = Arc::new(ApplicationService::new(
        application_repo.clone(),
        job_repo.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(TEST_SECRET, 86_400));

    let state = AppState {
        job_service,
        application_service,
        auth_service,
        cookie_secure: false,
    };

    (state, job_repo, application_repo)
}

pub async fn create_test_job(repo: &InMemoryJobRepository, hr_email: &str, title: &str) -> ObjectId {
    let job = Job {
        id: None,
        hr_email: hr_email.to_string(),
        company: Some("Acme".to_string()),
        title: Some(title.to_string()),
        category: Some("engineering".to_string()),
        company_logo: Some("https://acme.test/logo.png".to_string()),
        status: Some("active".to_string()),
        application_deadline: Some("2026-12-31".to_string()),
        extra: Document::new(),
    };
    repo.insert(job).await.unwrap()
}

/// Seeds an application directly, bypassing the service-level referential
/// check — the only way to produce a dangling job reference.
pub async fn create_test_application(
    repo: &InMemoryApplicationRepository,
    job_id: ObjectId,
    applicant: &str,
) -> ObjectId {
    let application = JobApplication {
        id: None,
        job_id,
        applicant: applicant.to_string(),
        status: Some("pending".to_string()),
        extra: Document::new(),
    };
    repo.insert(application).await.unwrap()
}

/// Issues a token signed with the test secret, as `POST /jwt` would.
pub fn issue_token(email: &str) -> String {
    AuthService::new(TEST_SECRET, 86_400)
        .issue(email.to_string(), Map::new())
        .unwrap()
}
