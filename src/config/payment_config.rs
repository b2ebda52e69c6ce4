//! # Payment Configuration Module
//!
//! 결제 대행사(Stripe) 연동 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export STRIPE_SECRET_KEY="sk_test_..."
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export STRIPE_API_BASE="https://api.stripe.com"   # stripe-mock 등 테스트 서버 사용 시
//! export STRIPE_TIMEOUT_SECONDS="15"
//! ```

use std::env;
use crate::core::errors::AppError;

pub struct StripeConfig;

impl StripeConfig {
    pub fn secret_key() -> Result<String, AppError> {
        env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::InternalError("STRIPE_SECRET_KEY must be set".to_string()))
    }

    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "https://api.stripe.com".to_string())
    }

    pub fn timeout_seconds() -> u64 {
        env::var("STRIPE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }
}
