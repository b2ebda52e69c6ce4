//! 사용자 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
