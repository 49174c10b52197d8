//! MongoDB implementation of the job repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use serde_json::json;

use crate::domain::entities::Job;
use crate::domain::repositories::JobRepository;
use crate::error::AppError;

/// MongoDB repository over the `jobs` collection.
///
/// The collection handle is injected at construction; the repository never
/// opens or closes connections itself.
pub struct MongoJobRepository {
    collection: Collection<Job>,
}

impl MongoJobRepository {
    /// Creates a new repository over a typed collection handle.
    pub fn new(collection: Collection<Job>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn insert(&self, job: Job) -> Result<ObjectId, AppError> {
        let result = self.collection.insert_one(&job).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::internal(
                "Insert acknowledgment carried a non-ObjectId id",
                json!({}),
            )
        })
    }

    async fn list<'a>(&self, hr_email: Option<&'a str>) -> Result<Vec<Job>, AppError> {
        let filter = match hr_email {
            Some(email) => doc! { "hr_email": email },
            None => doc! {},
        };

        let mut cursor = self.collection.find(filter).await?;
        let mut jobs = Vec::new();
        while let Some(job) = cursor.try_next().await? {
            jobs.push(job);
        }

        Ok(jobs)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Job>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Job>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Bson> = ids.iter().map(|id| Bson::ObjectId(*id)).collect();
        let mut cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } })
            .await?;

        let mut jobs = Vec::new();
        while let Some(job) = cursor.try_next().await? {
            jobs.push(job);
        }

        Ok(jobs)
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, AppError> {
        let count = self
            .collection
            .count_documents(doc! { "_id": id })
            .limit(1)
            .await?;

        Ok(count > 0)
    }
}
