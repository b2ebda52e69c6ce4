//! 프리미엄 패키지 조회 서비스 (읽기 전용)

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::PremiumPackageResponse;
use crate::repositories::PremiumPackageRepository;
use crate::utils::bson_utils::parse_object_id;

static PREMIUM_SERVICE_INSTANCE: OnceCell<Arc<PremiumService>> = OnceCell::new();

pub struct PremiumService {
    package_repo: Arc<PremiumPackageRepository>,
}

impl PremiumService {
    pub fn instance() -> Arc<Self> {
        PREMIUM_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            package_repo: ServiceLocator::get::<PremiumPackageRepository>(),
        }
    }

    pub async fn list_packages(&self) -> Result<Vec<PremiumPackageResponse>, AppError> {
        let packages = self.package_repo.find_all().await?;
        Ok(packages.into_iter().map(PremiumPackageResponse::from).collect())
    }

    pub async fn get_package(&self, id: &str) -> Result<PremiumPackageResponse, AppError> {
        let object_id = parse_object_id(id)?;

        self.package_repo
            .find_by_id(&object_id)
            .await?
            .map(PremiumPackageResponse::from)
            .ok_or_else(|| AppError::NotFound("Premium package not found.".to_string()))
    }
}

fn premium_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(PremiumService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "premium_service",
        constructor: premium_service_constructor,
    }
}
