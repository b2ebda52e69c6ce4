//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 조회 및 생성
//! - **자동 레지스트리**: `inventory` 기반 리포지토리/서비스 등록
//! - **초기화**: 시작 시 모든 리포지토리 인덱스 생성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 JSON 에러 응답 자동 생성
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use meal_mate_backend::core::registry::ServiceLocator;
//! use meal_mate_backend::db::Database;
//!
//! let database = Arc::new(Database::new().await?);
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//!
//! let meal_service = MealService::instance();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
