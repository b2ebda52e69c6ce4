//! # 사용자 관리 서비스 구현
//!
//! 인증은 프론트엔드가 담당하므로 이 서비스는 프로필 등록, 조회, 관리자 지정만 처리합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • Registration  (이메일 중복이면 거절)       │
//! │  • User Query    (목록 / 이메일 / 관리자 여부) │
//! │  • Admin Grant   (role = "admin")            │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!                 UserRepository
//! ```

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{AdminStatusResponse, RegisterUserRequest, RegistrationResponse, UpdateSummary, UserResponse};
use crate::repositories::UserRepository;
use crate::utils::bson_utils::parse_object_id;
use crate::utils::string_utils::validate_required_string;

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

/// 가입 결과. 핸들러가 상태 코드(201 / 200)를 고르는 데 사용합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(RegistrationResponse),
    AlreadyExists(RegistrationResponse),
}

impl Registration {
    fn created(inserted_id: String) -> Self {
        Registration::Created(RegistrationResponse {
            success: true,
            message: "User registered successfully.".to_string(),
            inserted_id: Some(inserted_id),
        })
    }

    fn already_exists() -> Self {
        Registration::AlreadyExists(RegistrationResponse {
            success: false,
            message: "user already exists".to_string(),
            inserted_id: None,
        })
    }
}

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            user_repo: ServiceLocator::get::<UserRepository>(),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserResponse, AppError> {
        let email = validate_required_string(email, "email")?;

        self.user_repo
            .find_by_email(&email)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))
    }

    pub async fn admin_status(&self, email: &str) -> Result<AdminStatusResponse, AppError> {
        let email = validate_required_string(email, "email")?;

        let user = self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        Ok(AdminStatusResponse { admin: user.is_admin() })
    }

    /// 회원가입
    ///
    /// 같은 이메일이 이미 있으면 아무것도 저장하지 않고 `AlreadyExists`를 반환합니다.
    /// 조회와 저장 사이의 경쟁은 막지 않습니다.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<Registration, AppError> {
        let user = request.into_user()?;

        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            log::info!("이미 가입된 사용자: {}", user.email);
            return Ok(Registration::already_exists());
        }

        let id = self.user_repo.insert(&user).await?;
        log::info!("👤 사용자 등록: {} ({})", user.email, id);

        Ok(Registration::created(id.to_hex()))
    }

    pub async fn make_admin(&self, id: &str) -> Result<UpdateSummary, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.user_repo.promote_to_admin(&object_id).await?;

        if result.matched_count > 0 {
            log::info!("관리자 지정: {}", id);
        }
        Ok(UpdateSummary::from(result))
    }
}

fn user_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(UserService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_outcomes() {
        match Registration::created("65a1f0c2e4b0a1b2c3d4e5f6".to_string()) {
            Registration::Created(body) => {
                assert!(body.success);
                assert_eq!(body.inserted_id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
            }
            other => panic!("unexpected {:?}", other),
        }

        match Registration::already_exists() {
            Registration::AlreadyExists(body) => {
                assert!(!body.success);
                assert_eq!(body.message, "user already exists");
                assert!(body.inserted_id.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
