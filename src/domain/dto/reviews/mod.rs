//! 리뷰 DTO
//!
//! 리뷰는 식단 문서에 내장되므로 응답 형식은 [`crate::domain::dto::meals`]의
//! `MealResponse`, `ReviewSummaryResponse`를 사용합니다.

pub mod request;

pub use request::*;
