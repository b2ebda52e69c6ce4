//! 프리미엄 패키지 리포지토리
//!
//! 읽기 전용 카탈로그이므로 목록과 단건 모두 Redis에 캐싱합니다.
//! 카탈로그 변경은 운영자가 DB에서 직접 하므로 TTL 만료로만 갱신됩니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use once_cell::sync::OnceCell;
use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{errors::AppError, registry::{init_repository, Repository, RepositoryRegistration, ServiceLocator}},
    db::Database,
    domain::entities::{PremiumPackage, PREMIUM_COLLECTION},
};

const ALL_PACKAGES_CACHE_KEY: &str = "premium:all";

static PREMIUM_PACKAGE_REPOSITORY_INSTANCE: OnceCell<Arc<PremiumPackageRepository>> = OnceCell::new();

pub struct PremiumPackageRepository {
    collection: Collection<PremiumPackage>,
    redis: Arc<RedisClient>,
    cache_ttl: usize,
}

impl PremiumPackageRepository {
    pub fn instance() -> Arc<Self> {
        PREMIUM_PACKAGE_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            collection: database.collection::<PremiumPackage>(PREMIUM_COLLECTION),
            redis: ServiceLocator::get::<RedisClient>(),
            cache_ttl: CacheConfig::ttl_seconds(),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<PremiumPackage>, AppError> {
        if let Ok(Some(cached)) = self.redis.get::<Vec<PremiumPackage>>(ALL_PACKAGES_CACHE_KEY).await {
            return Ok(cached);
        }
        log::debug!("캐시 미스: {}", ALL_PACKAGES_CACHE_KEY);

        let packages: Vec<PremiumPackage> = self.collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        let _ = self.redis
            .set_with_expiry(ALL_PACKAGES_CACHE_KEY, &packages, self.cache_ttl)
            .await;

        Ok(packages)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<PremiumPackage>, AppError> {
        let cache_key = format!("premium:{}", id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<PremiumPackage>(&cache_key).await {
            return Ok(Some(cached));
        }
        log::debug!("캐시 미스: {}", cache_key);

        let package = self.collection
            .find_one(doc! { "_id": *id })
            .await?;

        if let Some(ref package) = package {
            let _ = self.redis.set_with_expiry(&cache_key, package, self.cache_ttl).await;
        }

        Ok(package)
    }
}

#[async_trait]
impl Repository for PremiumPackageRepository {
    fn name(&self) -> &str {
        "premium_package"
    }

    fn collection_name(&self) -> &str {
        PREMIUM_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        // `_id` 조회뿐이라 추가 인덱스 없음
        Ok(())
    }
}

fn premium_package_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(PremiumPackageRepository::instance())
}

fn premium_package_repository_initializer() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(init_repository(PremiumPackageRepository::instance()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "premium_package_repository",
        constructor: premium_package_repository_constructor,
        initializer: premium_package_repository_initializer,
    }
}
