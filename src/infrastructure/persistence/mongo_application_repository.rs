//! MongoDB implementation of the application repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use serde_json::json;
use std::collections::HashMap;

use crate::domain::entities::{JobApplication, StatusUpdate};
use crate::domain::repositories::ApplicationRepository;
use crate::error::AppError;

/// MongoDB repository over the `applications` collection.
pub struct MongoApplicationRepository {
    collection: Collection<JobApplication>,
}

impl MongoApplicationRepository {
    /// Creates a new repository over a typed collection handle.
    pub fn new(collection: Collection<JobApplication>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ApplicationRepository for MongoApplicationRepository {
    async fn insert(&self, application: JobApplication) -> Result<ObjectId, AppError> {
        let result = self.collection.insert_one(&application).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::internal(
                "Insert acknowledgment carried a non-ObjectId id",
                json!({}),
            )
        })
    }

    async fn list_by_applicant(&self, applicant: &str) -> Result<Vec<JobApplication>, AppError> {
        let mut cursor = self
            .collection
            .find(doc! { "applicant": applicant })
            .await?;

        let mut applications = Vec::new();
        while let Some(application) = cursor.try_next().await? {
            applications.push(application);
        }

        Ok(applications)
    }

    async fn list_by_job(&self, job_id: ObjectId) -> Result<Vec<JobApplication>, AppError> {
        let mut cursor = self.collection.find(doc! { "jobId": job_id }).await?;

        let mut applications = Vec::new();
        while let Some(application) = cursor.try_next().await? {
            applications.push(application);
        }

        Ok(applications)
    }

    async fn count_by_job_ids(
        &self,
        job_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, AppError> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // One grouped count for the whole id set instead of a count query
        // per job.
        let ids: Vec<Bson> = job_ids.iter().map(|id| Bson::ObjectId(*id)).collect();
        let pipeline = vec![
            doc! { "$match": { "jobId": { "$in": ids } } },
            doc! { "$group": { "_id": "$jobId", "count": { "$sum": 1 } } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut counts = HashMap::new();
        while let Some(group) = cursor.try_next().await? {
            let job_id = group.get_object_id("_id")?;
            let count = match group.get("count") {
                Some(Bson::Int32(n)) => *n as u64,
                Some(Bson::Int64(n)) => *n as u64,
                _ => 0,
            };
            counts.insert(job_id, count);
        }

        Ok(counts)
    }

    async fn set_status(&self, id: ObjectId, status: &str) -> Result<StatusUpdate, AppError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await?;

        Ok(StatusUpdate {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }
}
