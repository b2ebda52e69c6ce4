//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `OnceCell` 싱글톤이며 `inventory`로 레지스트리에 등록됩니다.
//! 의존하는 리포지토리와 외부 클라이언트는 생성 시 `ServiceLocator`에서 가져옵니다.
//!
//! # Features
//!
//! - 식단 CRUD와 좋아요, 내장 리뷰 관리
//! - 출시 예정 식단 좋아요와 게시
//! - 식단 요청(주문) 접수, 제공, 취소
//! - 사용자 등록과 관리자 지정
//! - Stripe PaymentIntent 생성과 등급 배지 부여
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{meals::MealService, payments::PaymentService};
//!
//! let meal_service = MealService::instance();
//! let payment_service = PaymentService::instance();
//! ```

pub mod meals;
pub mod premium;
pub mod users;
pub mod upcoming_meals;
pub mod meal_requests;
pub mod payments;
