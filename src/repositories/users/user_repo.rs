//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다. 역할과 배지가 결제/관리자 지정으로
//! 수시로 바뀌므로 캐싱하지 않고 항상 MongoDB에서 읽습니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    results::UpdateResult,
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    core::{errors::AppError, registry::{init_repository, Repository, RepositoryRegistration, ServiceLocator}},
    db::Database,
    domain::{entities::{User, ADMIN_ROLE, USERS_COLLECTION}, models::Badge},
};

static USER_REPOSITORY_INSTANCE: OnceCell<Arc<UserRepository>> = OnceCell::new();

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email_lookup`: 이메일 조회용 (기존 데이터에 중복이 있을 수 있어 unique 아님)
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn instance() -> Arc<Self> {
        USER_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            collection: database.collection::<User>(USERS_COLLECTION),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.collection
            .find(doc! {})
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(AppError::from)
    }

    pub async fn insert(&self, user: &User) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(user)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted user id is not an ObjectId".to_string()))
    }

    pub async fn promote_to_admin(&self, id: &ObjectId) -> Result<UpdateResult, AppError> {
        self.collection
            .update_one(doc! { "_id": *id }, doc! { "$set": { "role": ADMIN_ROLE } })
            .await
            .map_err(AppError::from)
    }

    /// 배지를 변경하고, 해당 이메일의 사용자가 있었는지 반환합니다.
    pub async fn set_badge(&self, email: &str, badge: Badge) -> Result<bool, AppError> {
        let result = self.collection
            .update_one(doc! { "email": email }, doc! { "$set": { "badge": badge.as_str() } })
            .await?;

        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        USERS_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_lookup".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await?;

        Ok(())
    }
}

fn user_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(UserRepository::instance())
}

fn user_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(init_repository(UserRepository::instance()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
        initializer: user_repository_initializer,
    }
}
