//! # Domain Models Module
//!
//! 엔티티와 DTO가 공유하는 값 객체(Value Objects)를 정의합니다.
//!
//! - [`badge::Badge`] - 사용자 등급 (`Bronze` / `Silver` / `Gold` / `Platinum`)
//! - [`request_status::RequestStatus`] - 식단 요청 상태 (`Pending` / `Delivered`)

pub mod badge;
pub mod request_status;

pub use badge::Badge;
pub use request_status::RequestStatus;
