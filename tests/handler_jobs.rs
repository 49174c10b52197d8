mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use career_bridge::api::handlers::{
    create_job_handler, get_job_handler, jobs_with_counts_handler, list_jobs_handler,
};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};

fn make_server(state: career_bridge::AppState) -> TestServer {
    let app = Router::new()
        .route("/jobs", get(list_jobs_handler).post(create_job_handler))
        .route("/jobs/applications", get(jobs_with_counts_handler))
        .route("/jobs/{id}", get(get_job_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

// ─── GET /jobs ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_jobs_returns_all() {
    let (state, jobs, _applications) = common::create_test_state();
    common::create_test_job(&jobs, "hr@acme.test", "Rust Engineer").await;
    common::create_test_job(&jobs, "hr@globex.test", "Data Engineer").await;

    let server = make_server(state);
    let response = server.get("/jobs").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_jobs_filters_by_hr_email() {
    let (state, jobs, _applications) = common::create_test_state();
    common::create_test_job(&jobs, "hr@acme.test", "Rust Engineer").await;
    common::create_test_job(&jobs, "hr@acme.test", "Backend Engineer").await;
    common::create_test_job(&jobs, "hr@globex.test", "Data Engineer").await;

    let server = make_server(state);
    let response = server.get("/jobs?email=hr@acme.test").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    // Every returned job belongs to the filtered employer, no other leaks in.
    assert!(listed.iter().all(|job| job["hr_email"] == "hr@acme.test"));
}

#[tokio::test]
async fn test_list_jobs_unknown_email_is_empty_success() {
    let (state, jobs, _applications) = common::create_test_state();
    common::create_test_job(&jobs, "hr@acme.test", "Rust Engineer").await;

    let server = make_server(state);
    let response = server.get("/jobs?email=nobody@nowhere.test").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

// ─── GET /jobs/applications ──────────────────────────────────────────────────

#[tokio::test]
async fn test_jobs_with_application_counts() {
    let (state, jobs, applications) = common::create_test_state();
    let popular = common::create_test_job(&jobs, "hr@acme.test", "Rust Engineer").await;
    let quiet = common::create_test_job(&jobs, "hr@acme.test", "Backend Engineer").await;
    let other = common::create_test_job(&jobs, "hr@globex.test", "Data Engineer").await;

    common::create_test_application(&applications, popular, "a@mail.test").await;
    common::create_test_application(&applications, popular, "b@mail.test").await;
    // An application for another employer's job must not bleed into counts.
    common::create_test_application(&applications, other, "c@mail.test").await;

    let server = make_server(state);
    let response = server.get("/jobs/applications?email=hr@acme.test").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);

    let count_for = |id: ObjectId| {
        listed
            .iter()
            .find(|job| job["id"] == id.to_hex())
            .map(|job| job["application_count"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(count_for(popular), 2);
    assert_eq!(count_for(quiet), 0);
}

#[tokio::test]
async fn test_jobs_with_counts_requires_email() {
    let (state, _jobs, _applications) = common::create_test_state();

    let server = make_server(state);
    let response = server.get("/jobs/applications").await;

    response.assert_status_bad_request();
}

// ─── GET /jobs/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_job_by_id() {
    let (state, jobs, _applications) = common::create_test_state();
    let id = common::create_test_job(&jobs, "hr@acme.test", "Rust Engineer").await;

    let server = make_server(state);
    let response = server.get(&format!("/jobs/{}", id.to_hex())).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id.to_hex());
    assert_eq!(body["title"], "Rust Engineer");
    assert_eq!(body["applicationDeadline"], "2026-12-31");
}

#[tokio::test]
async fn test_get_job_unknown_id_is_not_found() {
    let (state, _jobs, _applications) = common::create_test_state();

    let server = make_server(state);
    let response = server
        .get(&format!("/jobs/{}", ObjectId::new().to_hex()))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_get_job_malformed_id_is_bad_request() {
    let (state, _jobs, _applications) = common::create_test_state();

    let server = make_server(state);
    let response = server.get("/jobs/not-a-hex-id").await;

    response.assert_status_bad_request();
}

// ─── POST /jobs ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_job_returns_ack_and_persists() {
    let (state, _jobs, _applications) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/jobs")
        .json(&json!({
            "hr_email": "hr@acme.test",
            "company": "Acme",
            "title": "Rust Engineer",
            "salary_range": { "min": 90, "max": 140 },
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let ack = response.json::<Value>();
    assert_eq!(ack["acknowledged"], true);
    let id = ack["insertedId"].as_str().unwrap().to_string();

    // Extra posting fields survive storage untouched.
    let fetched = server.get(&format!("/jobs/{}", id)).await;
    fetched.assert_status_ok();
    let job = fetched.json::<Value>();
    assert_eq!(job["company"], "Acme");
    assert_eq!(job["salary_range"]["max"], 140);
}
