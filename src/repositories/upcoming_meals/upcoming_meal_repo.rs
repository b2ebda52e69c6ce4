//! 출시 예정 식단 리포지토리 (`upcomingMeals`)

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    core::{errors::AppError, registry::{init_repository, Repository, RepositoryRegistration, ServiceLocator}},
    db::Database,
    domain::entities::{UpcomingMeal, UPCOMING_MEALS_COLLECTION},
    utils::bson_utils::increment_count_pipeline,
};

static UPCOMING_MEAL_REPOSITORY_INSTANCE: OnceCell<Arc<UpcomingMealRepository>> = OnceCell::new();

pub struct UpcomingMealRepository {
    collection: Collection<UpcomingMeal>,
}

impl UpcomingMealRepository {
    pub fn instance() -> Arc<Self> {
        UPCOMING_MEAL_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            collection: database.collection::<UpcomingMeal>(UPCOMING_MEALS_COLLECTION),
        }
    }

    /// 좋아요 내림차순 목록
    pub async fn find_all_by_popularity(&self) -> Result<Vec<UpcomingMeal>, AppError> {
        self.collection
            .find(doc! {})
            .sort(doc! { "likes": -1, "_id": 1 })
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UpcomingMeal>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(AppError::from)
    }

    pub async fn insert(&self, meal: &UpcomingMeal) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(meal)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted upcoming meal id is not an ObjectId".to_string()))
    }

    /// 좋아요를 1 올리고 갱신된 값을 반환합니다. 문서가 없으면 `None`
    ///
    /// 문자열로 저장된 좋아요도 숫자로 바꾼 뒤 더합니다.
    pub async fn increment_likes(&self, id: &ObjectId) -> Result<Option<i64>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection
            .find_one_and_update(doc! { "_id": *id }, increment_count_pipeline("likes"))
            .with_options(options)
            .await?;

        Ok(updated.map(|meal| meal.likes))
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for UpcomingMealRepository {
    fn name(&self) -> &str {
        "upcoming_meal"
    }

    fn collection_name(&self) -> &str {
        UPCOMING_MEALS_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        let likes_index = IndexModel::builder()
            .keys(doc! { "likes": -1 })
            .options(IndexOptions::builder().name("likes_desc".to_string()).build())
            .build();

        self.collection
            .create_index(likes_index)
            .await?;

        Ok(())
    }
}

fn upcoming_meal_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(UpcomingMealRepository::instance())
}

fn upcoming_meal_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(init_repository(UpcomingMealRepository::instance()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "upcoming_meal_repository",
        constructor: upcoming_meal_repository_constructor,
        initializer: upcoming_meal_repository_initializer,
    }
}
