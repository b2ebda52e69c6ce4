//! 결제 관련 서비스
//!
//! - [`stripe_client::StripeClient`] - Stripe REST API 호출 (시작 시 `ServiceLocator::set`으로 등록)
//! - [`payment_service::PaymentService`] - PaymentIntent 생성과 배지 부여

pub mod stripe_client;
pub mod payment_service;

pub use stripe_client::{PaymentIntent, StripeClient};
pub use payment_service::PaymentService;
