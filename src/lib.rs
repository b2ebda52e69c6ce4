//! Meal Mate 백엔드
//!
//! 식단 구독 서비스의 REST API 서버입니다. 식단과 리뷰, 출시 예정 식단,
//! 프리미엄 패키지, 사용자와 배지, 식단 요청, Stripe 결제를 다룹니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 및 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (게시 기준, 배지 부여)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스와 리포지토리는 `inventory` 기반 레지스트리에 등록되는 싱글톤이며,
//! [`core::registry::ServiceLocator`]가 의존성을 찾아 연결합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use meal_mate_backend::services::meals::MealService;
//!
//! let meals = MealService::instance().list_meals().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
