//! # Meal Request HTTP Handlers
//!
//! `/meals/request`는 `/meals/{id}`보다 먼저 등록되어야 합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/meals/request` | 전체 요청 |
//! | `GET` | `/meals/request-multiple/{email}` | 사용자의 요청 |
//! | `POST` | `/meals/request-multiple` | 요청 접수 (`Pending`) |
//! | `PUT` | `/meals/request/{id}` | 제공 처리 (`Delivered`) |
//! | `DELETE` | `/meals/request-multiple/{id}` | 요청 취소 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::MealRequestDraft;
use crate::services::meal_requests::MealRequestService;

#[get("/meals/request")]
pub async fn list_requests() -> Result<HttpResponse, AppError> {
    let requests = MealRequestService::instance().list_requests().await?;
    Ok(HttpResponse::Ok().json(requests))
}

#[get("/meals/request-multiple/{email}")]
pub async fn requests_by_user(email: web::Path<String>) -> Result<HttpResponse, AppError> {
    let requests = MealRequestService::instance()
        .requests_by(&email)
        .await
        .inspect_err(|e| log::error!("식단 요청 조회 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(requests))
}

#[post("/meals/request-multiple")]
pub async fn create_request(payload: web::Json<MealRequestDraft>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = MealRequestService::instance()
        .create_request(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("식단 요청 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(response))
}

#[put("/meals/request/{id}")]
pub async fn serve_request(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = MealRequestService::instance()
        .serve_request(&id)
        .await
        .inspect_err(|e| log::error!("식단 제공 실패 ({}): {}", id, e))?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/meals/request-multiple/{id}")]
pub async fn cancel_request(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = MealRequestService::instance().cancel_request(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
