//! # CareerBridge Server
//!
//! A job board backend exposing postings and applications over HTTP, built
//! with Axum and MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB integration
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Job posting CRUD over two schema-less collections
//! - Cookie-based JWT authentication for the applicant listing
//! - Batched application counts and denormalizing joins (no per-document fan-out)
//! - CORS allow-list with credentialed requests
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URI="mongodb://localhost:27017"
//! export JWT_ACCESS_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ApplicationService, AuthService, Claims, JobService};
    pub use crate::domain::entities::{Job, JobApplication, StatusUpdate};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
