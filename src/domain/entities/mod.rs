//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 문서 구조입니다. 모든 엔티티는 서비스가 직접 다루지 않는
//! 필드를 `#[serde(flatten)]`으로 보존하므로, 클라이언트가 저장한 데이터가 수정 과정에서
//! 유실되지 않습니다.
//!
//! | 엔티티 | 컬렉션 |
//! |---|---|
//! | [`Meal`] | `meals` |
//! | [`PremiumPackage`] | `premium` |
//! | [`User`] | `users` |
//! | [`UpcomingMeal`] | `upcomingMeals` |
//! | [`MealRequest`] | `requestedMeals` |

pub mod meal;
pub mod premium_package;
pub mod user;
pub mod upcoming_meal;
pub mod meal_request;

pub use meal::*;
pub use premium_package::*;
pub use user::*;
pub use upcoming_meal::*;
pub use meal_request::*;
