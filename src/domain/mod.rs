//! # Domain Layer Module
//!
//! 식단 구독 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서 (Meal, PremiumPackage, User, UpcomingMeal, MealRequest)
//! ├── DTOs      - HTTP 요청/응답 본문
//! └── Models    - 값 객체 (Badge, RequestStatus)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 스키마 정책
//!
//! 프론트엔드가 식단과 패키지 문서를 자유롭게 구성하므로, 엔티티는 서비스가 읽고 쓰는
//! 필드만 타입으로 선언하고 나머지는 `details: Document`에 담아 그대로 왕복시킵니다.
//!
//! ```rust,ignore
//! use meal_mate_backend::domain::{MealDraft, MealResponse};
//!
//! let draft: MealDraft = serde_json::from_value(body)?;
//! draft.validate()?;
//! let meal = draft.into_meal()?;          // Entity
//! let response = MealResponse::from(meal); // 응답 DTO
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
