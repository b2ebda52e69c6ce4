//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 전체 사용자 | 200 |
//! | `GET` | `/users/{email}` | 이메일로 조회 | 200 / 404 |
//! | `GET` | `/users/admin/{email}` | 관리자 여부 | 200 / 404 |
//! | `POST` | `/users` | 회원가입 | 201 / 200 (중복) |
//! | `PATCH` | `/users/admin/{id}` | 관리자 지정 | 200 |

use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::RegisterUserRequest;
use crate::services::users::{Registration, UserService};

#[get("/users")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let users = UserService::instance().list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/admin/{email}")]
pub async fn admin_status(email: web::Path<String>) -> Result<HttpResponse, AppError> {
    let status = UserService::instance().admin_status(&email).await?;
    Ok(HttpResponse::Ok().json(status))
}

#[get("/users/{email}")]
pub async fn get_user(email: web::Path<String>) -> Result<HttpResponse, AppError> {
    let user = UserService::instance().get_user_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 회원가입 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "email": "user@example.com", "name": "Kim", "photo": "https://..." }
/// ```
///
/// # 응답
///
/// - 201 `{ "success": true, "message": "User registered successfully.", "insertedId": "..." }`
/// - 200 `{ "success": false, "message": "user already exists", "insertedId": null }`
///
/// `role`, `badge`는 무시되며 신규 사용자는 `Bronze` 배지로 시작합니다.
#[post("/users")]
pub async fn register_user(payload: web::Json<RegisterUserRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registration = UserService::instance()
        .register(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("회원가입 실패: {}", e))?;

    Ok(match registration {
        Registration::Created(body) => HttpResponse::Created().json(body),
        Registration::AlreadyExists(body) => HttpResponse::Ok().json(body),
    })
}

#[patch("/users/admin/{id}")]
pub async fn make_admin(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let summary = UserService::instance().make_admin(&id).await?;
    Ok(HttpResponse::Ok().json(summary))
}
