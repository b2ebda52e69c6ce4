//! # 식단 리포지토리
//!
//! `meals` 컬렉션과 내장 리뷰 배열에 대한 데이터 액세스를 담당합니다.
//! 단건 조회는 Redis에 캐싱하고, 쓰기 후에는 해당 키를 무효화합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `meal:{id}`
//! - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
//! - 캐시 오류는 요청을 실패시키지 않습니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{IndexOptions, UpdateModifications, UpdateOptions},
    results::UpdateResult,
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{errors::AppError, registry::{init_repository, Repository, RepositoryRegistration, ServiceLocator}},
    db::Database,
    domain::entities::{Meal, MealReviewRow, Review, MEALS_COLLECTION},
    utils::bson_utils::increment_count_pipeline,
};

static MEAL_REPOSITORY_INSTANCE: OnceCell<Arc<MealRepository>> = OnceCell::new();

pub struct MealRepository {
    collection: Collection<Meal>,
    redis: Arc<RedisClient>,
    cache_ttl: usize,
}

impl MealRepository {
    pub fn instance() -> Arc<Self> {
        MEAL_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            collection: database.collection::<Meal>(MEALS_COLLECTION),
            redis: ServiceLocator::get::<RedisClient>(),
            cache_ttl: CacheConfig::ttl_seconds(),
        }
    }

    fn cache_key(id: &ObjectId) -> String {
        format!("meal:{}", id.to_hex())
    }

    async fn invalidate_cache(&self, id: &ObjectId) {
        if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
            log::warn!("식단 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Meal>, AppError> {
        self.collection
            .find(doc! {})
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Meal>, AppError> {
        let cache_key = Self::cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Meal>(&cache_key).await {
            return Ok(Some(cached));
        }
        log::debug!("캐시 미스: {}", cache_key);

        let meal = self.collection
            .find_one(doc! { "_id": *id })
            .await?;

        if let Some(ref meal) = meal {
            let _ = self.redis.set_with_expiry(&cache_key, meal, self.cache_ttl).await;
        }

        Ok(meal)
    }

    /// 새 식단을 저장하고 `_id`를 반환합니다. `meal.id`가 있으면 그 값을 그대로 사용합니다.
    pub async fn insert(&self, meal: &Meal) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(meal)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted meal id is not an ObjectId".to_string()))?;

        self.invalidate_cache(&id).await;
        Ok(id)
    }

    /// 전달된 필드를 `$set` 합니다. 문서가 없으면 새로 만듭니다.
    pub async fn upsert_fields(&self, id: &ObjectId, fields: Document) -> Result<UpdateResult, AppError> {
        let options = UpdateOptions::builder().upsert(true).build();

        let result = self.collection
            .update_one(doc! { "_id": *id }, doc! { "$set": fields })
            .with_options(options)
            .await?;

        self.invalidate_cache(id).await;
        Ok(result)
    }

    pub async fn increment_likes(&self, id: &ObjectId) -> Result<bool, AppError> {
        self.modify(id, doc! { "_id": *id }, increment_count_pipeline("likes")).await
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await?;

        self.invalidate_cache(id).await;
        Ok(result.deleted_count > 0)
    }

    // ===== 리뷰 (내장 배열) =====

    pub async fn push_review(&self, id: &ObjectId, review: &Review) -> Result<bool, AppError> {
        self.modify(id, doc! { "_id": *id }, doc! { "$push": { "reviews": review.to_document() } })
            .await
    }

    /// 이메일이 일치하는 첫 리뷰의 `user`/`comment` 중 전달된 값만 바꿉니다.
    pub async fn update_review(
        &self,
        id: &ObjectId,
        email: &str,
        user: Option<&str>,
        comment: Option<&str>,
    ) -> Result<bool, AppError> {
        let mut changes = Document::new();
        if let Some(user) = user {
            changes.insert("reviews.$.user", user);
        }
        if let Some(comment) = comment {
            changes.insert("reviews.$.comment", comment);
        }
        if changes.is_empty() {
            return Ok(false);
        }

        self.modify(
            id,
            doc! { "_id": *id, "reviews.email": email },
            doc! { "$set": changes },
        )
        .await
    }

    pub async fn pull_reviews_by_email(&self, id: &ObjectId, email: &str) -> Result<bool, AppError> {
        self.modify(id, doc! { "_id": *id }, doc! { "$pull": { "reviews": { "email": email } } })
            .await
    }

    pub async fn pull_reviews_by_comment(&self, id: &ObjectId, comment: &str) -> Result<bool, AppError> {
        self.modify(id, doc! { "_id": *id }, doc! { "$pull": { "reviews": { "comment": comment } } })
            .await
    }

    pub async fn find_reviewed_by(&self, email: &str) -> Result<Vec<Meal>, AppError> {
        self.collection
            .find(doc! { "reviews.email": email })
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    /// 모든 리뷰를 펼쳐 식단 좋아요 내림차순으로 한 페이지를 가져옵니다.
    pub async fn review_page(&self, skip: u64, limit: u64) -> Result<Vec<MealReviewRow>, AppError> {
        let skip = i64::try_from(skip).unwrap_or(i64::MAX);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let pipeline = vec![
            doc! { "$unwind": "$reviews" },
            doc! { "$project": {
                "_id": 1,
                "title": 1,
                "likes": 1,
                "reviewUser": "$reviews.user",
                "reviewComment": "$reviews.comment",
            } },
            doc! { "$sort": { "likes": -1, "_id": 1 } },
            doc! { "$skip": skip },
            doc! { "$limit": limit },
        ];

        let documents: Vec<Document> = self.collection
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(|document| {
                bson::from_document(document)
                    .map_err(|e| AppError::DatabaseError(format!("Malformed review row: {}", e)))
            })
            .collect()
    }

    /// `update_one` 후 실제로 문서가 바뀌었는지 반환하고 캐시를 비웁니다.
    async fn modify(
        &self,
        id: &ObjectId,
        filter: Document,
        update: impl Into<UpdateModifications>,
    ) -> Result<bool, AppError> {
        let result = self.collection
            .update_one(filter, update)
            .await?;

        if result.modified_count > 0 {
            self.invalidate_cache(id).await;
        }
        Ok(result.modified_count > 0)
    }
}

#[async_trait]
impl Repository for MealRepository {
    fn name(&self) -> &str {
        "meal"
    }

    fn collection_name(&self) -> &str {
        MEALS_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        let likes_index = IndexModel::builder()
            .keys(doc! { "likes": -1 })
            .options(IndexOptions::builder().name("likes_desc".to_string()).build())
            .build();

        let reviewer_index = IndexModel::builder()
            .keys(doc! { "reviews.email": 1 })
            .options(IndexOptions::builder().name("reviews_email".to_string()).build())
            .build();

        self.collection
            .create_indexes([likes_index, reviewer_index])
            .await?;

        Ok(())
    }
}

fn meal_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(MealRepository::instance())
}

fn meal_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(init_repository(MealRepository::instance()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "meal_repository",
        constructor: meal_repository_constructor,
        initializer: meal_repository_initializer,
    }
}
