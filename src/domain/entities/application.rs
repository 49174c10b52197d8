//! Job application entity.

use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// An application stored in the `applications` collection.
///
/// `job_id` is a native [`ObjectId`] reference to the Job it targets, the
/// same identifier type the store assigns — one id type end-to-end. The
/// reference is weak: deleting a Job does not cascade, and read paths must
/// tolerate a dangling `job_id`.
///
/// `status` is the only field mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "jobId")]
    pub job_id: ObjectId,
    /// Applicant email; the protected listing is keyed on it.
    pub applicant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Acknowledgment of a targeted status update.
///
/// Mirrors the driver's `matched_count` / `modified_count`. A matched count
/// of zero means no document carried the given id.
#[derive(Debug, Clone, Copy)]
pub struct StatusUpdate {
    pub matched: u64,
    pub modified: u64,
}
