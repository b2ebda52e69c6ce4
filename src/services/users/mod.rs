//! 사용자 관리 비즈니스 로직
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::instance();
//! let admin = service.admin_status("user@example.com").await?.admin;
//! ```

pub mod user_service;

pub use user_service::{Registration, UserService};
