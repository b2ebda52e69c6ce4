//! 사용자 요청 DTO

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::entities::User;
use crate::utils::bson_utils::json_to_document;

/// 서버가 관리하므로 가입 요청에서 무시하는 필드
const SERVER_MANAGED_FIELDS: [&str; 2] = ["role", "badge"];

/// `POST /users` 회원가입 요청
///
/// 이메일 외의 프로필 필드(이름, 사진 등)는 그대로 저장됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl RegisterUserRequest {
    pub fn into_user(self) -> Result<User, AppError> {
        let mut profile = self.profile;
        for field in SERVER_MANAGED_FIELDS {
            profile.remove(field);
        }

        let details = json_to_document(profile)?;
        Ok(User::new(self.email.trim().to_string(), details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_strips_server_fields() {
        let request: RegisterUserRequest = serde_json::from_value(json!({
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "email": "park@example.com",
            "name": "Park",
            "photo": "https://example.com/p.png",
            "role": "admin",
            "badge": "Platinum"
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let user = request.into_user().unwrap();

        assert!(user.id.is_none());
        assert_eq!(user.email, "park@example.com");
        assert!(!user.is_admin());
        assert_eq!(user.badge.as_deref(), Some("Bronze"));
        assert_eq!(user.details.get_str("name").unwrap(), "Park");
        assert!(!user.details.contains_key("role"));
        assert!(!user.details.contains_key("_id"));
    }

    #[test]
    fn test_register_request_requires_valid_email() {
        let request: RegisterUserRequest =
            serde_json::from_value(json!({ "email": "nope", "name": "X" })).unwrap();
        assert!(request.validate().is_err());
    }
}
