//! 식단 요청 리포지토리 (`requestedMeals`)

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    core::{errors::AppError, registry::{init_repository, Repository, RepositoryRegistration, ServiceLocator}},
    db::Database,
    domain::{entities::{MealRequest, MEAL_REQUESTS_COLLECTION}, models::RequestStatus},
};

static MEAL_REQUEST_REPOSITORY_INSTANCE: OnceCell<Arc<MealRequestRepository>> = OnceCell::new();

pub struct MealRequestRepository {
    collection: Collection<MealRequest>,
}

impl MealRequestRepository {
    pub fn instance() -> Arc<Self> {
        MEAL_REQUEST_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            collection: database.collection::<MealRequest>(MEAL_REQUESTS_COLLECTION),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<MealRequest>, AppError> {
        self.collection
            .find(doc! {})
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_requester(&self, email: &str) -> Result<Vec<MealRequest>, AppError> {
        self.collection
            .find(doc! { "userData.email": email })
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<MealRequest>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(AppError::from)
    }

    pub async fn insert(&self, request: &MealRequest) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(request)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted meal request id is not an ObjectId".to_string()))
    }

    pub async fn set_status(&self, id: &ObjectId, status: RequestStatus) -> Result<bool, AppError> {
        let result = self.collection
            .update_one(doc! { "_id": *id }, doc! { "$set": { "requestStatus": status.as_str() } })
            .await?;

        Ok(result.matched_count > 0)
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for MealRequestRepository {
    fn name(&self) -> &str {
        "meal_request"
    }

    fn collection_name(&self) -> &str {
        MEAL_REQUESTS_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        let requester_index = IndexModel::builder()
            .keys(doc! { "userData.email": 1 })
            .options(IndexOptions::builder().name("requester_email".to_string()).build())
            .build();

        self.collection
            .create_index(requester_index)
            .await?;

        Ok(())
    }
}

fn meal_request_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(MealRequestRepository::instance())
}

fn meal_request_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(init_repository(MealRequestRepository::instance()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "meal_request_repository",
        constructor: meal_request_repository_constructor,
        initializer: meal_request_repository_initializer,
    }
}
