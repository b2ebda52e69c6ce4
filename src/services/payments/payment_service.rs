//! 결제 서비스
//!
//! PaymentIntent를 만든 뒤 응답과 별개로 사용자 배지를 갱신합니다.
//! 배지 갱신 실패는 로그로만 남고 결제 응답에는 영향을 주지 않습니다.

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{PaymentIntentRequest, PaymentIntentResponse};
use crate::domain::models::Badge;
use crate::repositories::UserRepository;
use crate::services::payments::stripe_client::StripeClient;

static PAYMENT_SERVICE_INSTANCE: OnceCell<Arc<PaymentService>> = OnceCell::new();

pub struct PaymentService {
    stripe: Arc<StripeClient>,
    user_repo: Arc<UserRepository>,
}

/// 결제 후 수행할 배지 변경. 이메일이나 알려진 패키지가 없으면 `None`
fn badge_assignment(request: &PaymentIntentRequest) -> Option<(String, Badge)> {
    let email = request.user_email.clone()?;
    match request.target_badge() {
        Some(badge) => Some((email, badge)),
        None => {
            log::warn!(
                "알 수 없는 패키지, 배지 유지: {:?} ({})",
                request.package_type,
                email
            );
            None
        }
    }
}

impl PaymentService {
    pub fn instance() -> Arc<Self> {
        PAYMENT_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            stripe: ServiceLocator::get::<StripeClient>(),
            user_repo: ServiceLocator::get::<UserRepository>(),
        }
    }

    pub async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, AppError> {
        let intent = self.stripe
            .create_payment_intent(request.amount, &request.currency)
            .await?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            AppError::ExternalServiceError("Stripe response did not include a client secret".to_string())
        })?;

        if let Some((email, badge)) = badge_assignment(&request) {
            let user_repo = Arc::clone(&self.user_repo);
            actix_web::rt::spawn(async move {
                match user_repo.set_badge(&email, badge).await {
                    Ok(true) => log::info!("🏅 배지 변경: {} → {}", email, badge),
                    Ok(false) => log::error!("배지 변경 실패, 사용자 없음: {}", email),
                    Err(e) => log::error!("배지 변경 실패 ({}): {}", email, e),
                }
            });
        }

        Ok(PaymentIntentResponse { client_secret })
    }
}

fn payment_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(PaymentService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "payment_service",
        constructor: payment_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> PaymentIntentRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_badge_assignment_for_known_package() {
        let assignment = badge_assignment(&request(json!({
            "amount": 4999,
            "currency": "usd",
            "userEmail": "kim@example.com",
            "packageType": "Platinum"
        })));

        assert_eq!(assignment, Some(("kim@example.com".to_string(), Badge::Platinum)));
    }

    #[test]
    fn test_no_badge_assignment_without_email_or_package() {
        assert_eq!(
            badge_assignment(&request(json!({ "amount": 100, "currency": "usd", "packageType": "Gold" }))),
            None
        );
        assert_eq!(
            badge_assignment(&request(json!({
                "amount": 100,
                "currency": "usd",
                "userEmail": "kim@example.com",
                "packageType": "Diamond"
            }))),
            None
        );
    }

    #[test]
    fn test_unknown_package_leaves_badge_unchanged() {
        for package in [json!("Diamond"), json!(""), serde_json::Value::Null] {
            let assignment = badge_assignment(&request(json!({
                "amount": 100,
                "currency": "usd",
                "userEmail": "kim@example.com",
                "packageType": package
            })));

            assert_eq!(assignment, None);
        }
    }

    #[test]
    fn test_package_type_ignores_case() {
        let assignment = badge_assignment(&request(json!({
            "amount": 100,
            "currency": "usd",
            "userEmail": "kim@example.com",
            "packageType": "gold"
        })));

        assert_eq!(assignment, Some(("kim@example.com".to_string(), Badge::Gold)));
    }
}
