//! # Upcoming Meal HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/upcoming-meals` | 좋아요 내림차순 목록 |
//! | `POST` | `/upcoming-meals` | 등록 (201) |
//! | `POST` | `/upcoming-meals/{mealId}/like` | 좋아요 +1, 갱신된 `likes` 반환 |
//! | `PUT` | `/upcoming-meals/publish/{id}` | 기준치 이상이면 정식 식단으로 게시 |

use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::MealDraft;
use crate::services::upcoming_meals::UpcomingMealService;

#[get("/upcoming-meals")]
pub async fn list_upcoming_meals() -> Result<HttpResponse, AppError> {
    let meals = UpcomingMealService::instance()
        .list_by_popularity()
        .await
        .inspect_err(|e| log::error!("출시 예정 식단 조회 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(meals))
}

#[post("/upcoming-meals")]
pub async fn create_upcoming_meal(payload: web::Json<MealDraft>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UpcomingMealService::instance()
        .create(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("출시 예정 식단 등록 실패: {}", e))?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/upcoming-meals/{meal_id}/like")]
pub async fn like_upcoming_meal(meal_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = UpcomingMealService::instance().like(&meal_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 게시 핸들러
///
/// 좋아요가 부족하면 200과 함께 `success: false`를 돌려줍니다.
#[put("/upcoming-meals/publish/{id}")]
pub async fn publish_upcoming_meal(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = UpcomingMealService::instance()
        .publish(&id)
        .await
        .inspect_err(|e| log::error!("식단 게시 실패 ({}): {}", id, e))?;

    Ok(HttpResponse::Ok().json(response))
}
