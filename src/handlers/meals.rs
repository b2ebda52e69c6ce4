//! # Meal HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/meals` | 전체 식단 | 200 |
//! | `GET` | `/meals/{id}` | 식단 조회 | 200 / 404 |
//! | `POST` | `/meals` | 식단 등록 | 201 |
//! | `PUT` | `/meals/{id}` | 필드 수정 (없으면 생성) | 200 / 404 |
//! | `PUT` | `/meals/like/{id}` | 좋아요 +1 | 200 / 404 |
//! | `DELETE` | `/meals/{id}` | 식단 삭제 | 200 / 404 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::{MealDraft, MealUpdateRequest};
use crate::services::meals::MealService;

#[get("/meals")]
pub async fn list_meals() -> Result<HttpResponse, AppError> {
    let meals = MealService::instance().list_meals().await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[get("/meals/{id}")]
pub async fn get_meal(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let meal = MealService::instance().get_meal(&id).await?;
    Ok(HttpResponse::Ok().json(meal))
}

/// 식단 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "title": "Bibimbap", "price": 12.5, "category": "Lunch", "image": "https://..." }
/// ```
///
/// `likes`는 0, `reviews`는 빈 배열로 시작하며 나머지 필드는 그대로 저장됩니다.
#[post("/meals")]
pub async fn create_meal(payload: web::Json<MealDraft>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = MealService::instance()
        .create_meal(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("식단 등록 실패: {}", e))?;

    Ok(HttpResponse::Created().json(response))
}

#[put("/meals/like/{id}")]
pub async fn like_meal(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = MealService::instance().like_meal(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/meals/{id}")]
pub async fn update_meal(
    id: web::Path<String>,
    payload: web::Json<MealUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let fields = payload.into_inner().into_set_document()?;

    let response = MealService::instance()
        .update_meal(&id, fields)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/meals/{id}")]
pub async fn delete_meal(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = MealService::instance().delete_meal(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
