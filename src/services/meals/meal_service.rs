//! # 식단 서비스
//!
//! 식단 CRUD와 좋아요를 처리합니다. 경로 파라미터의 ObjectId 파싱과
//! 404 판정, 응답 메시지 구성을 담당하고 저장은 [`MealRepository`]에 위임합니다.

use std::any::Any;
use std::sync::Arc;
use mongodb::bson::Document;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{ApiResponse, MealDraft, MealResponse};
use crate::repositories::MealRepository;
use crate::utils::bson_utils::parse_object_id;

static MEAL_SERVICE_INSTANCE: OnceCell<Arc<MealService>> = OnceCell::new();

pub struct MealService {
    meal_repo: Arc<MealRepository>,
}

impl MealService {
    pub fn instance() -> Arc<Self> {
        MEAL_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            meal_repo: ServiceLocator::get::<MealRepository>(),
        }
    }

    pub async fn list_meals(&self) -> Result<Vec<MealResponse>, AppError> {
        let meals = self.meal_repo.find_all().await?;
        Ok(meals.into_iter().map(MealResponse::from).collect())
    }

    pub async fn get_meal(&self, id: &str) -> Result<MealResponse, AppError> {
        let object_id = parse_object_id(id)?;

        self.meal_repo
            .find_by_id(&object_id)
            .await?
            .map(MealResponse::from)
            .ok_or_else(|| AppError::NotFound("Meal not found.".to_string()))
    }

    pub async fn create_meal(&self, draft: MealDraft) -> Result<ApiResponse, AppError> {
        let meal = draft.into_meal()?;
        let id = self.meal_repo.insert(&meal).await?;

        log::info!("🍱 식단 등록: {}", id);
        Ok(ApiResponse::ok("Meal added successfully.").with_inserted_id(id.to_hex()))
    }

    /// 검증된 `$set` 필드를 덮어쓰며, 해당 `_id`의 식단이 없으면 새로 만듭니다.
    pub async fn update_meal(&self, id: &str, fields: Document) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.meal_repo.upsert_fields(&object_id, fields).await?;

        update_outcome(result.matched_count, result.upserted_id.is_some())
    }

    pub async fn like_meal(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        if self.meal_repo.increment_likes(&object_id).await? {
            Ok(ApiResponse::ok("Like updated successfully."))
        } else {
            Err(AppError::NotFound("Meal not found.".to_string()))
        }
    }

    pub async fn delete_meal(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        if self.meal_repo.delete(&object_id).await? {
            log::info!("🗑️ 식단 삭제: {}", id);
            Ok(ApiResponse::ok("Meal deleted successfully."))
        } else {
            Err(AppError::NotFound("Meal not found.".to_string()))
        }
    }
}

/// upsert 결과 판정: 기존 문서가 매칭되었거나 새로 만들어졌으면 성공입니다.
fn update_outcome(matched_count: u64, upserted: bool) -> Result<ApiResponse, AppError> {
    if matched_count > 0 || upserted {
        Ok(ApiResponse::ok("Meal updated successfully."))
    } else {
        Err(AppError::NotFound("Meal not found.".to_string()))
    }
}

fn meal_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(MealService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "meal_service",
        constructor: meal_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_outcome_matched_existing_meal() {
        let response = update_outcome(1, false).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Meal updated successfully.");
    }

    #[test]
    fn test_update_outcome_upserted_new_meal() {
        assert!(update_outcome(0, true).unwrap().success);
    }

    #[test]
    fn test_update_outcome_without_match_is_not_found() {
        assert!(matches!(update_outcome(0, false), Err(AppError::NotFound(_))));
    }
}
