//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 설정 파일은 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env`로 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, MongoDB, Redis, Rate Limiting, 식단 정책 설정
//! - [`payment_config`] - Stripe 결제 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://meal-mate.web.app"
//!
//! # MongoDB (MONGODB_URI 또는 Atlas 계정 정보)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DB_USER="mealmate"
//! export DB_PASS="secret"
//! export DB_CLUSTER="cluster0.xxxxxx.mongodb.net"
//! export DATABASE_NAME="mealsDB"
//!
//! # Redis
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="600"
//!
//! # Stripe
//! export STRIPE_SECRET_KEY="sk_test_..."
//!
//! # 식단 게시 정책
//! export PUBLISH_LIKES_THRESHOLD="10"
//! ```

pub mod data_config;
pub mod payment_config;

pub use data_config::*;
pub use payment_config::*;
