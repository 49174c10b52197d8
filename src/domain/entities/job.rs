//! Job posting entity.

use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A job posting stored in the `jobs` collection.
///
/// Only the fields the backend reads are typed. Everything else an employer
/// submits (salary range, requirements, location, ...) is carried verbatim in
/// `extra` and round-trips through storage untouched — the collection is
/// schema-less by design.
///
/// `hr_email` identifies the posting employer and is the only required field;
/// employer-facing listings filter on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Store-assigned identifier; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
