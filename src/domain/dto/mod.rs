//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 구조입니다. 요청 DTO는 `validator`로 검증한 뒤
//! 도메인 엔티티로 변환되고, 응답 DTO는 엔티티의 `ObjectId`를 16진수 문자열로
//! 바꾸어 프론트엔드에 전달합니다.
//!
//! ```text
//! JSON ──serde──▶ Request DTO ──validate()──▶ Entity ──▶ Repository
//! Entity ──From──▶ Response DTO ──serde──▶ JSON
//! ```

pub mod common;
pub mod meals;
pub mod reviews;
pub mod premium;
pub mod users;
pub mod meal_requests;
pub mod payments;

pub use common::*;
pub use meals::*;
pub use reviews::*;
pub use premium::*;
pub use users::*;
pub use meal_requests::*;
pub use payments::*;
