//! # Service Registry
//!
//! 애플리케이션 전역 의존성 컨테이너입니다.
//!
//! ## 등록 방식
//!
//! 1. **인프라 컴포넌트**: `Database`, `RedisClient`, `StripeClient`처럼
//!    비동기 연결이 필요한 객체는 `main`에서 생성 후 [`ServiceLocator::set`]으로 등록합니다.
//! 2. **리포지토리/서비스**: 각 모듈이 `OnceCell` 싱글톤과 함께
//!    `inventory::submit!`으로 [`RepositoryRegistration`] / [`ServiceRegistration`]을 제출합니다.
//!    [`ServiceLocator::get`]은 타입 이름(`MealRepository` → `meal`)으로 등록 정보를 찾아 생성합니다.
//!
//! ```rust,ignore
//! static MEAL_REPOSITORY_INSTANCE: OnceCell<Arc<MealRepository>> = OnceCell::new();
//!
//! impl MealRepository {
//!     pub fn instance() -> Arc<Self> {
//!         MEAL_REPOSITORY_INSTANCE.get_or_init(|| Arc::new(Self::new())).clone()
//!     }
//! }
//!
//! inventory::submit! {
//!     crate::core::registry::RepositoryRegistration {
//!         name: "meal_repository",
//!         constructor: meal_repository_constructor,
//!         initializer: meal_repository_initializer,
//!     }
//! }
//! ```
//!
//! ## 초기화 순서
//!
//! ```text
//! main()
//!  ├─ ServiceLocator::set(database)
//!  ├─ ServiceLocator::set(redis_client)
//!  ├─ ServiceLocator::set(stripe_client)
//!  └─ ServiceLocator::initialize_all()
//!       ├─ Step 1: 리포지토리 생성
//!       ├─ Step 2: 리포지토리 init (인덱스 생성)
//!       └─ Step 3: 서비스 생성
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::core::errors::AppError;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// MongoDB 컬렉션을 담당하는 리포지토리의 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리 이름 (로그 출력용)
    fn name(&self) -> &str;

    /// 담당하는 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 시작 시 한 번 호출됩니다. 인덱스 생성 등을 수행합니다.
    async fn init(&self) -> Result<(), AppError>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// `{entity}_service` 형식의 이름
    pub name: &'static str,
    /// `Box<Arc<Self>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// `{entity}_repository` 형식의 이름
    pub name: &'static str,
    /// `Box<Arc<Self>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
    /// [`Repository::init`]을 호출하는 초기화 함수
    pub initializer: fn() -> BoxFuture<'static, Result<(), AppError>>,
}

/// 리포지토리를 초기화하고 담당 컬렉션을 로그로 남깁니다
///
/// 각 리포지토리의 `initializer`가 이 함수를 호출합니다.
pub async fn init_repository<R: Repository + ?Sized>(repository: Arc<R>) -> Result<(), AppError> {
    log::debug!("{} → '{}' 컬렉션 초기화", repository.name(), repository.collection_name());
    repository.init().await.map_err(|e| {
        log::error!("{} 초기화 실패 ('{}'): {}", repository.name(), repository.collection_name(), e);
        e
    })
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();
    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(extract_clean_name_static(registration.name), registration);
    }
    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();
    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(extract_clean_name_static(registration.name), registration);
    }
    print_cache_initialized("Repository", cache.len());
    cache
});

/// 비교용 이름 정규화: 소문자 + 언더스코어 제거
///
/// `upcoming_meal` 과 `UpcomingMeal` 이 같은 키가 되도록 합니다.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn extract_clean_name_static(name: &str) -> String {
    let stripped = name
        .strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name);

    normalize_name(stripped)
}

/// 타입 기반 의존성 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("ServiceLocator lock poisoned".to_string())
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 인스턴스를 반환합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존성이 있으면 패닉합니다.
    /// 둘 다 시작 시점의 구성 오류이므로 즉시 중단합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Ok(instance) => instance,
            Err(e) => {
                log::error!("❌ {}", e);
                panic!("{}", e);
            }
        }
    }

    /// 타입 `T`의 인스턴스를 찾거나 등록 정보로 생성합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Result<Arc<T>, AppError> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.lookup::<T>(&type_id)? {
            return Ok(instance);
        }

        {
            let mut initializing = LOCATOR.initializing.write().map_err(poisoned)?;
            if !initializing.insert(type_id) {
                return Err(AppError::InternalError(format!(
                    "Circular dependency detected: {} is already being initialized",
                    type_name
                )));
            }
        }

        // 생성자는 다른 의존성을 조회할 수 있으므로 락 밖에서 호출
        let constructed = Self::construct::<T>(type_name);

        LOCATOR.initializing.write().map_err(poisoned)?.remove(&type_id);

        let instance = constructed?;
        let mut instances = LOCATOR.instances.write().map_err(poisoned)?;
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name)))
    }

    fn lookup<T: 'static + Send + Sync>(&self, type_id: &TypeId) -> Result<Option<Arc<T>>, AppError> {
        let instances = self.instances.read().map_err(poisoned)?;

        match instances.get(type_id) {
            Some(instance) => instance
                .clone()
                .downcast::<T>()
                .map(Some)
                .map_err(|_| AppError::InternalError(format!(
                    "Type mismatch in ServiceLocator: {}",
                    std::any::type_name::<T>()
                ))),
            None => Ok(None),
        }
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Result<Arc<T>, AppError> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let constructor = if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            REPOSITORY_NAME_CACHE
                .get(&normalize_name(entity))
                .map(|registration| registration.constructor)
        } else if let Some(entity) = clean_type_name.strip_suffix("Service") {
            SERVICE_NAME_CACHE
                .get(&normalize_name(entity))
                .map(|registration| registration.constructor)
        } else {
            None
        };

        let constructor = constructor.ok_or_else(|| AppError::InternalError(format!(
            "Service not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
            type_name
        )))?;

        constructor()
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| AppError::InternalError(format!("Type mismatch for registration: {}", type_name)))
    }

    /// `crate::module::TypeName` → `TypeName`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 이미 생성된 인스턴스를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        println!("📦 Registering: {}", clean_name);

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
            }
            Err(e) => log::error!("ServiceLocator lock poisoned while registering {}: {}", clean_name, e),
        }
    }

    /// 등록된 모든 리포지토리와 서비스를 생성하고 리포지토리를 초기화합니다.
    pub async fn initialize_all() -> Result<(), AppError> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in &repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);

            print_step_start(2, "Initializing Repositories");
            for registration in &repo_registrations {
                (registration.initializer)().await?;
                print_sub_task(registration.name, "✓ Indexes ready");
            }
            print_step_complete(2, "Repositories initialized", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(3, "Creating Service instances");
            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(3, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct PaymentGatewayStub {
        label: &'static str,
    }

    struct UnregisteredHelper;

    struct IndexStub {
        fail: bool,
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl Repository for IndexStub {
        fn name(&self) -> &str {
            "IndexStub"
        }

        fn collection_name(&self) -> &str {
            "stubs"
        }

        async fn init(&self) -> Result<(), AppError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if self.fail {
                Err(AppError::DatabaseError("index build failed".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_registration_names_match_type_names() {
        assert_eq!(extract_clean_name_static("meal_repository"), "meal");
        assert_eq!(extract_clean_name_static("upcoming_meal_repository"), "upcomingmeal");
        assert_eq!(extract_clean_name_static("meal_request_service"), "mealrequest");

        let type_name = ServiceLocator::extract_clean_type_name(
            "meal_mate_backend::repositories::upcoming_meals::UpcomingMealRepository",
        );
        assert_eq!(type_name, "UpcomingMealRepository");
        assert_eq!(
            normalize_name(type_name.strip_suffix("Repository").unwrap()),
            extract_clean_name_static("upcoming_meal_repository")
        );
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(PaymentGatewayStub { label: "stub" }));

        let first = ServiceLocator::get::<PaymentGatewayStub>();
        let second = ServiceLocator::get::<PaymentGatewayStub>();

        assert_eq!(first.label, "stub");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unregistered_type_is_an_error() {
        let result = ServiceLocator::try_get::<UnregisteredHelper>();

        match result {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("UnregisteredHelper")),
            _ => panic!("Expected InternalError for unregistered type"),
        }
    }

    #[actix_web::test]
    async fn test_init_repository_runs_init_once() {
        let repo = Arc::new(IndexStub { fail: false, calls: Default::default() });

        init_repository(repo.clone()).await.unwrap();

        assert_eq!(repo.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_init_repository_propagates_failure() {
        let repo = Arc::new(IndexStub { fail: true, calls: Default::default() });

        let result = init_repository(repo).await;

        assert!(matches!(result, Err(AppError::DatabaseError(msg)) if msg == "index build failed"));
    }
}
