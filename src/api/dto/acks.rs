//! Store acknowledgment DTOs shared by the write endpoints.

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::domain::entities::StatusUpdate;

/// Insert acknowledgment, in the driver's ack shape.
#[derive(Debug, Serialize)]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

impl InsertAck {
    pub fn new(id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id.to_hex(),
        }
    }
}

/// Update acknowledgment, in the driver's ack shape.
#[derive(Debug, Serialize)]
pub struct UpdateAck {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

impl From<StatusUpdate> for UpdateAck {
    fn from(update: StatusUpdate) -> Self {
        Self {
            acknowledged: true,
            matched_count: update.matched,
            modified_count: update.modified,
        }
    }
}
