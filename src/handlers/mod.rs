//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 각 핸들러는 요청 DTO를 검증하고
//! 싱글톤 서비스를 호출한 뒤 결과를 JSON으로 돌려줍니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Meal Mate 웹 앱)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services                                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories (MongoDB + Redis)              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현으로 JSON 응답이 됩니다.
//!
//! ```rust,ignore
//! #[post("/meals")]
//! pub async fn create_meal(payload: web::Json<MealDraft>) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let response = MealService::instance().create_meal(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```

pub mod meals;
pub mod reviews;
pub mod premium;
pub mod users;
pub mod upcoming_meals;
pub mod meal_requests;
pub mod payments;
