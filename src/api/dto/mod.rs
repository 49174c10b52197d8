//! Request and response DTOs.

pub mod acks;
pub mod applications;
pub mod jobs;
pub mod token;
