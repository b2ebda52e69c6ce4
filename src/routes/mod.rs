//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 루트 경로에 바로 등록됩니다. actix-web은 등록 순서대로
//! 경로를 매칭하므로 `/meals/reviews`, `/meals/request` 같은 고정 경로가
//! `/meals/{id}`보다 먼저 등록되어야 합니다.
//!
//! # Route Groups
//!
//! | 그룹 | 경로 |
//! |------|------|
//! | 기본 | `/`, `/health` |
//! | 리뷰 | `/meals/reviews`, `/meals/user-reviews/{email}`, `/reviews/byUser`, `/meals/review/{id}`, `/meals/reviews/{mealId}` |
//! | 식단 요청 | `/meals/request`, `/meals/request-multiple` |
//! | 식단 | `/meals`, `/meals/{id}`, `/meals/like/{id}` |
//! | 프리미엄 | `/premium`, `/premium/{id}` |
//! | 사용자 | `/users`, `/users/{email}`, `/users/admin/...` |
//! | 출시 예정 식단 | `/upcoming-meals` |
//! | 결제 | `/create-payment-intent` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::config::Environment;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트와 추출기 설정을 등록합니다
///
/// JSON 본문과 쿼리 문자열의 파싱 실패도 [`AppError::ValidationError`]로 바뀌어
/// 다른 에러와 같은 형식의 400 응답이 됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config());

    cfg.service(index)
        .service(health_check);

    // 고정 경로를 먼저 등록
    configure_review_routes(cfg);
    configure_meal_request_routes(cfg);
    configure_meal_routes(cfg);

    configure_premium_routes(cfg);
    configure_user_routes(cfg);
    configure_upcoming_meal_routes(cfg);
    configure_payment_routes(cfg);
}

/// JSON 본문 추출 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            log::warn!("잘못된 JSON 요청: {}", err);
            AppError::ValidationError(err.to_string()).into()
        })
}

/// 쿼리 문자열 추출 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| {
            log::warn!("잘못된 쿼리 문자열: {}", err);
            AppError::ValidationError(err.to_string()).into()
        })
}

fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::reviews::list_reviews)
        .service(handlers::reviews::reviews_by_user)
        .service(handlers::reviews::add_review)
        .service(handlers::reviews::update_review)
        .service(handlers::reviews::delete_review)
        .service(handlers::reviews::delete_review_by_comment);
}

fn configure_meal_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::meal_requests::list_requests)
        .service(handlers::meal_requests::requests_by_user)
        .service(handlers::meal_requests::create_request)
        .service(handlers::meal_requests::serve_request)
        .service(handlers::meal_requests::cancel_request);
}

/// 식단 라우트
///
/// `/meals/like/{id}`는 `PUT /meals/{id}`보다 먼저 등록됩니다.
fn configure_meal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::meals::list_meals)
        .service(handlers::meals::create_meal)
        .service(handlers::meals::like_meal)
        .service(handlers::meals::get_meal)
        .service(handlers::meals::update_meal)
        .service(handlers::meals::delete_meal);
}

fn configure_premium_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::premium::list_packages)
        .service(handlers::premium::get_package);
}

/// 사용자 라우트
///
/// `/users/admin/{email}`이 `/users/{email}`보다 먼저 등록됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::list_users)
        .service(handlers::users::admin_status)
        .service(handlers::users::get_user)
        .service(handlers::users::register_user)
        .service(handlers::users::make_admin);
}

fn configure_upcoming_meal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::upcoming_meals::list_upcoming_meals)
        .service(handlers::upcoming_meals::create_upcoming_meal)
        .service(handlers::upcoming_meals::like_upcoming_meal)
        .service(handlers::upcoming_meals::publish_upcoming_meal);
}

fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::payments::create_payment_intent);
}

/// 서버 동작 확인용 루트 엔드포인트
#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Meal Mate Server is running")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "meal_mate_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "environment": "development"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "meal_mate_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": Environment::current().as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_index_reports_running() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();

        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "Meal Mate Server is running");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "meal_mate_backend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"amount\": ")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_payment_amount_below_minimum_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .set_json(json!({ "amount": 0, "currency": "usd" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_review_page_query_is_validated() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/meals/reviews?limit=0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/meals/reviews?page=first").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_review_update_without_changes_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::patch()
            .uri("/meals/review/665f1c2e8a1b2c3d4e5f6a7b")
            .set_json(json!({ "email": "kim@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_meal_update_with_mistyped_fields_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        for body in [json!({ "title": 123 }), json!({ "reviews": "none" })] {
            let req = test::TestRequest::put()
                .uri("/meals/665f1c2e8a1b2c3d4e5f6a7b")
                .set_json(body)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }
}
