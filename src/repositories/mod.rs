//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `OnceCell` 싱글톤이며 `inventory`로 레지스트리에 등록되어
//! 시작 시 [`ServiceLocator::initialize_all`](crate::core::registry::ServiceLocator::initialize_all)이
//! 인스턴스 생성과 인덱스 준비를 수행합니다.
//!
//! | 리포지토리 | 컬렉션 | 캐싱 |
//! |---|---|---|
//! | [`MealRepository`] | `meals` | `meal:{id}` |
//! | [`PremiumPackageRepository`] | `premium` | `premium:all`, `premium:{id}` |
//! | [`UserRepository`] | `users` | - |
//! | [`UpcomingMealRepository`] | `upcomingMeals` | - |
//! | [`MealRequestRepository`] | `requestedMeals` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::MealRepository;
//!
//! let meals = MealRepository::instance().find_all().await?;
//! ```

pub mod meals;
pub mod premium;
pub mod users;
pub mod upcoming_meals;
pub mod meal_requests;

pub use meals::MealRepository;
pub use premium::PremiumPackageRepository;
pub use users::UserRepository;
pub use upcoming_meals::UpcomingMealRepository;
pub use meal_requests::MealRequestRepository;
