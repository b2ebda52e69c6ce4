//! # Stripe REST 클라이언트
//!
//! PaymentIntent 생성만 사용하므로 SDK 대신 `reqwest`로 직접 호출합니다.
//!
//! ```text
//! POST {STRIPE_API_BASE}/v1/payment_intents
//! Authorization: Bearer sk_...
//! Idempotency-Key: <uuid v4>
//! Content-Type: application/x-www-form-urlencoded
//!
//! amount=2999&currency=usd
//! ```
//!
//! 실패 응답(`{"error": {"message": ...}}`)은 [`AppError::ExternalServiceError`]로 변환됩니다.

use std::time::Duration;
use serde::Deserialize;
use uuid::Uuid;
use crate::config::StripeConfig;
use crate::core::errors::AppError;

/// Stripe PaymentIntent 응답 중 사용하는 필드
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    /// 환경 변수 설정으로 클라이언트를 만듭니다. `STRIPE_SECRET_KEY`가 없으면 에러
    pub fn new() -> Result<Self, AppError> {
        Self::with_settings(
            StripeConfig::secret_key()?,
            StripeConfig::api_base(),
            Duration::from_secs(StripeConfig::timeout_seconds()),
        )
    }

    pub fn with_settings(secret_key: String, api_base: String, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build Stripe HTTP client: {}", e)))?;

        Ok(Self {
            http,
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, AppError> {
        let url = format!("{}/v1/payment_intents", self.api_base);

        let response = self.http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&payment_intent_form(amount, currency))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(stripe_error_message(status.as_u16(), &body)));
        }

        let intent = response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Invalid Stripe response: {}", e)))?;

        log::info!("💳 PaymentIntent 생성: {} ({} {}, {})", intent.id, intent.amount, intent.currency, intent.status);
        Ok(intent)
    }
}

fn payment_intent_form(amount: i64, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount.to_string()),
        ("currency", currency.trim().to_lowercase()),
    ]
}

/// Stripe 에러 본문에서 사람이 읽을 수 있는 메시지를 뽑습니다.
fn stripe_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<StripeErrorBody>(body) {
        Ok(StripeErrorBody { error: StripeErrorDetail { message: Some(message), code } }) => match code {
            Some(code) => format!("Stripe error ({}): {} [{}]", status, message, code),
            None => format!("Stripe error ({}): {}", status, message),
        },
        _ => format!("Stripe error ({})", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_form() {
        let form = payment_intent_form(2999, " USD ");

        assert_eq!(form, vec![("amount", "2999".to_string()), ("currency", "usd".to_string())]);
    }

    #[test]
    fn test_stripe_error_message_with_code() {
        let body = r#"{"error": {"message": "Your card was declined.", "code": "card_declined", "type": "card_error"}}"#;

        assert_eq!(
            stripe_error_message(402, body),
            "Stripe error (402): Your card was declined. [card_declined]"
        );
    }

    #[test]
    fn test_stripe_error_message_fallbacks() {
        let body = r#"{"error": {"message": "Invalid API Key provided"}}"#;
        assert_eq!(stripe_error_message(401, body), "Stripe error (401): Invalid API Key provided");

        assert_eq!(stripe_error_message(500, "<html>oops</html>"), "Stripe error (500)");
        assert_eq!(stripe_error_message(400, r#"{"error": {}}"#), "Stripe error (400)");
    }

    #[test]
    fn test_payment_intent_parsing() {
        let body = r#"{
            "id": "pi_3Nabc",
            "object": "payment_intent",
            "amount": 2999,
            "currency": "usd",
            "client_secret": "pi_3Nabc_secret_xyz",
            "status": "requires_payment_method"
        }"#;

        let intent: PaymentIntent = serde_json::from_str(body).unwrap();

        assert_eq!(intent.id, "pi_3Nabc");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_3Nabc_secret_xyz"));
        assert_eq!(intent.amount, 2999);
    }

    #[test]
    fn test_with_settings_trims_trailing_slash() {
        let client = StripeClient::with_settings(
            "sk_test_123".to_string(),
            "http://localhost:12111/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.api_base, "http://localhost:12111");
    }
}
