//! # 출시 예정 식단 서비스
//!
//! 스테이징 식단 등록, 좋아요, 게시를 담당합니다.
//!
//! ## 게시 흐름
//!
//! ```text
//! upcomingMeals ──(likes >= 기준치)──▶ meals 에 같은 _id 로 insert ──▶ upcomingMeals 에서 delete
//! ```
//!
//! 두 단계는 트랜잭션으로 묶이지 않습니다. insert 후 delete가 실패하면 양쪽에 문서가
//! 남으며, 같은 식단을 다시 게시하면 `_id` 중복으로 실패합니다.

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::config::MealConfig;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{ApiResponse, MealDraft, UpcomingMealResponse};
use crate::domain::entities::{Meal, UpcomingMeal};
use crate::repositories::{MealRepository, UpcomingMealRepository};
use crate::utils::bson_utils::parse_object_id;

static UPCOMING_MEAL_SERVICE_INSTANCE: OnceCell<Arc<UpcomingMealService>> = OnceCell::new();

pub struct UpcomingMealService {
    upcoming_repo: Arc<UpcomingMealRepository>,
    meal_repo: Arc<MealRepository>,
    publish_threshold: i64,
}

fn likes_requirement_message(threshold: i64) -> String {
    format!("Meal needs at least {} likes to be published.", threshold)
}

/// 스테이징 문서 조회 결과에 대한 게시 판정
#[derive(Debug)]
enum PublishDecision {
    /// 좋아요 부족. 현재 좋아요 수를 담습니다.
    NeedsMoreLikes(i64),
    /// 같은 `_id`로 `meals`에 insert한 뒤 스테이징에서 지울 식단
    Publish(Meal),
}

impl PublishDecision {
    fn decide(upcoming: Option<UpcomingMeal>, threshold: i64) -> Result<Self, AppError> {
        let upcoming = upcoming
            .ok_or_else(|| AppError::NotFound("Upcoming meal not found.".to_string()))?;

        if upcoming.can_publish(threshold) {
            Ok(PublishDecision::Publish(Meal::from(upcoming)))
        } else {
            Ok(PublishDecision::NeedsMoreLikes(upcoming.likes))
        }
    }
}

impl UpcomingMealService {
    pub fn instance() -> Arc<Self> {
        UPCOMING_MEAL_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            upcoming_repo: ServiceLocator::get::<UpcomingMealRepository>(),
            meal_repo: ServiceLocator::get::<MealRepository>(),
            publish_threshold: MealConfig::publish_likes_threshold(),
        }
    }

    pub async fn list_by_popularity(&self) -> Result<Vec<UpcomingMealResponse>, AppError> {
        let meals = self.upcoming_repo.find_all_by_popularity().await?;
        Ok(meals.into_iter().map(UpcomingMealResponse::from).collect())
    }

    pub async fn create(&self, draft: MealDraft) -> Result<ApiResponse, AppError> {
        let meal = draft.into_upcoming_meal()?;
        let id = self.upcoming_repo.insert(&meal).await?;

        log::info!("🆕 출시 예정 식단 등록: {}", id);
        Ok(ApiResponse::ok("Upcoming meal added successfully.").with_inserted_id(id.to_hex()))
    }

    pub async fn like(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        let likes = self.upcoming_repo
            .increment_likes(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Meal not found.".to_string()))?;

        Ok(ApiResponse::ok("Like added successfully.").with_likes(likes))
    }

    /// 좋아요가 기준치 이상이면 정식 식단으로 옮깁니다.
    ///
    /// 기준치 미달은 에러가 아니라 `success: false` 응답입니다.
    pub async fn publish(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        let upcoming = self.upcoming_repo.find_by_id(&object_id).await?;

        let meal = match PublishDecision::decide(upcoming, self.publish_threshold)? {
            PublishDecision::Publish(meal) => meal,
            PublishDecision::NeedsMoreLikes(likes) => {
                log::info!("게시 보류: {} (likes {} < {})", id, likes, self.publish_threshold);
                return Ok(ApiResponse::rejected(likes_requirement_message(self.publish_threshold)));
            }
        };

        self.meal_repo.insert(&meal).await?;

        if !self.upcoming_repo.delete(&object_id).await? {
            log::warn!("게시 후 스테이징 문서가 이미 없음: {}", id);
        }

        log::info!("📢 식단 게시: {}", id);
        Ok(ApiResponse::ok("Meal published successfully."))
    }
}

fn upcoming_meal_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(UpcomingMealService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "upcoming_meal_service",
        constructor: upcoming_meal_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_requirement_message() {
        assert_eq!(likes_requirement_message(10), "Meal needs at least 10 likes to be published.");
        assert_eq!(likes_requirement_message(3), "Meal needs at least 3 likes to be published.");
    }

    fn staged(likes: i64) -> UpcomingMeal {
        let mut meal = UpcomingMeal::new(Some("Japchae".to_string()), Default::default());
        meal.id = Some(mongodb::bson::oid::ObjectId::new());
        meal.likes = likes;
        meal
    }

    #[test]
    fn test_publish_missing_meal_is_not_found() {
        assert!(matches!(PublishDecision::decide(None, 10), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_publish_below_threshold_needs_more_likes() {
        match PublishDecision::decide(Some(staged(9)), 10).unwrap() {
            PublishDecision::NeedsMoreLikes(likes) => assert_eq!(likes, 9),
            other => panic!("expected NeedsMoreLikes, got {:?}", other),
        }
    }

    #[test]
    fn test_publish_at_threshold_keeps_staging_id() {
        let upcoming = staged(10);
        let staging_id = upcoming.id;

        match PublishDecision::decide(Some(upcoming), 10).unwrap() {
            PublishDecision::Publish(meal) => {
                assert_eq!(meal.id, staging_id);
                assert_eq!(meal.likes, 10);
                assert_eq!(meal.title.as_deref(), Some("Japchae"));
            }
            other => panic!("expected Publish, got {:?}", other),
        }
    }
}
