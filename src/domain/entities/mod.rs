//! Core business entities.

pub mod application;
pub mod job;

pub use application::{JobApplication, StatusUpdate};
pub use job::Job;
