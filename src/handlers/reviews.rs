//! # Review HTTP Handlers
//!
//! 리뷰는 식단 문서에 내장되어 있어 경로가 `/meals` 아래에 섞여 있습니다.
//! `/meals/reviews`는 `/meals/{id}`보다 먼저 등록되어야 합니다.
//!
//! | 메서드 | 경로 | 본문 |
//! |--------|------|------|
//! | `GET` | `/meals/reviews?page=&limit=` | - |
//! | `GET` | `/meals/user-reviews/{email}` | - |
//! | `POST` | `/reviews/byUser` | `{mealId, user, email, comment}` |
//! | `PATCH` | `/meals/review/{id}` | `{email, user?, comment?}` |
//! | `DELETE` | `/meals/review/{id}` | `{email}` |
//! | `DELETE` | `/meals/reviews/{mealId}` | `{comment}` |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::{
    NewReviewRequest, ReviewCommentDeleteRequest, ReviewDeleteRequest, ReviewPageQuery, ReviewUpdateRequest,
};
use crate::services::meals::ReviewService;

/// 리뷰 목록 (식단 좋아요 내림차순)
///
/// `page`는 1부터, `limit`은 1~100 (기본 5)
#[get("/meals/reviews")]
pub async fn list_reviews(query: web::Query<ReviewPageQuery>) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let reviews = ReviewService::instance()
        .review_page(&query)
        .await
        .inspect_err(|e| log::error!("리뷰 목록 조회 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(reviews))
}

#[get("/meals/user-reviews/{email}")]
pub async fn reviews_by_user(email: web::Path<String>) -> Result<HttpResponse, AppError> {
    let meals = ReviewService::instance().meals_reviewed_by(&email).await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[post("/reviews/byUser")]
pub async fn add_review(payload: web::Json<NewReviewRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ReviewService::instance().add_review(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[patch("/meals/review/{id}")]
pub async fn update_review(
    id: web::Path<String>,
    payload: web::Json<ReviewUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ReviewService::instance()
        .update_review(&id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/meals/review/{id}")]
pub async fn delete_review(
    id: web::Path<String>,
    payload: web::Json<ReviewDeleteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ReviewService::instance()
        .delete_review_by_email(&id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/meals/reviews/{meal_id}")]
pub async fn delete_review_by_comment(
    meal_id: web::Path<String>,
    payload: web::Json<ReviewCommentDeleteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = ReviewService::instance()
        .delete_review_by_comment(&meal_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
