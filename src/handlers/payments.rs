//! Payment HTTP Handlers

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::PaymentIntentRequest;
use crate::services::payments::PaymentService;

/// PaymentIntent 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /create-payment-intent`
///
/// # 요청 본문
///
/// ```json
/// { "amount": 2999, "currency": "usd", "userEmail": "user@example.com", "packageType": "Gold" }
/// ```
///
/// # 응답
///
/// ```json
/// { "clientSecret": "pi_..._secret_..." }
/// ```
///
/// 배지 부여는 응답 이후 백그라운드에서 수행됩니다. Stripe 호출 실패는 502입니다.
#[post("/create-payment-intent")]
pub async fn create_payment_intent(payload: web::Json<PaymentIntentRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = PaymentService::instance()
        .create_payment_intent(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("PaymentIntent 생성 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(response))
}
