use serde::Serialize;
use serde_json::{Map, Value};
use crate::domain::entities::User;
use crate::utils::bson_utils::document_to_json_map;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email, role, badge, details } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            role,
            badge,
            details: document_to_json_map(details),
        }
    }
}

/// `GET /users/admin/{email}` 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_user_response_shape() {
        let user = User::new("kim@example.com".to_string(), doc! { "name": "Kim" });
        let body = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(body["email"], "kim@example.com");
        assert_eq!(body["badge"], "Bronze");
        assert_eq!(body["name"], "Kim");
        assert!(body.get("role").is_none());
    }

    #[test]
    fn test_admin_status_body() {
        let body = serde_json::to_value(AdminStatusResponse { admin: true }).unwrap();
        assert_eq!(body, serde_json::json!({ "admin": true }));
    }
}
