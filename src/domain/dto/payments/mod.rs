//! 결제 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::models::Badge;
use crate::utils::string_utils::deserialize_optional_string;

/// `POST /create-payment-intent`
///
/// `amount`는 통화의 최소 단위(센트 등)입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    #[validate(range(min = 1, message = "amount must be a positive integer"))]
    pub amount: i64,

    #[validate(length(equal = 3, message = "currency must be a 3-letter ISO code"))]
    pub currency: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub package_type: Option<String>,
}

impl PaymentIntentRequest {
    /// 결제 후 부여할 배지. 알 수 없는 패키지면 `None`
    pub fn target_badge(&self) -> Option<Badge> {
        self.package_type.as_deref().and_then(Badge::from_package_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_request_parsing() {
        let request: PaymentIntentRequest = serde_json::from_value(json!({
            "amount": 2999,
            "currency": "usd",
            "userEmail": "kim@example.com",
            "packageType": "Gold"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.user_email.as_deref(), Some("kim@example.com"));
        assert_eq!(request.target_badge(), Some(Badge::Gold));
    }

    #[test]
    fn test_payment_request_validation() {
        let request: PaymentIntentRequest =
            serde_json::from_value(json!({ "amount": 0, "currency": "usd" })).unwrap();
        assert!(request.validate().is_err());

        let request: PaymentIntentRequest =
            serde_json::from_value(json!({ "amount": 100, "currency": "dollars" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_package_has_no_badge() {
        let request: PaymentIntentRequest = serde_json::from_value(json!({
            "amount": 100,
            "currency": "usd",
            "packageType": "Diamond"
        }))
        .unwrap();

        assert_eq!(request.target_badge(), None);
        assert!(request.user_email.is_none());
    }

    #[test]
    fn test_response_uses_client_secret_key() {
        let body = serde_json::to_value(PaymentIntentResponse {
            client_secret: "pi_123_secret_456".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "clientSecret": "pi_123_secret_456" }));
    }
}
