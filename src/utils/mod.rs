//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`bson_utils`] - ObjectId 파싱, BSON ↔ JSON 변환
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use meal_mate_backend::utils::bson_utils::parse_object_id;
//! use meal_mate_backend::utils::string_utils::validate_required_string;
//!
//! let meal_id = parse_object_id("65a1f0c2e4b0a1b2c3d4e5f6")?;
//! let email = validate_required_string("  user@example.com ", "email")?;
//! ```

pub mod string_utils;
pub mod bson_utils;
pub mod display_terminal;
