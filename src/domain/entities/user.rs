//! User Entity
//!
//! 인증은 프론트엔드(Firebase 등)에서 처리하고, 이 서비스는 이메일로 식별되는
//! 프로필과 역할, 등급 배지만 보관합니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use crate::domain::models::Badge;

pub const USERS_COLLECTION: &str = "users";

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub email: String,
    /// `"admin"`이면 관리자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// 등급 배지 이름. 과거 데이터에는 빈 문자열이나 누락이 있을 수 있습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(flatten)]
    pub details: Document,
}

impl User {
    /// 신규 가입자. 역할 없이 `Bronze` 배지로 시작합니다.
    pub fn new(email: String, details: Document) -> Self {
        Self {
            id: None,
            email,
            role: None,
            badge: Some(Badge::default().to_string()),
            details,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_new_user_starts_bronze() {
        let user = User::new("kim@example.com".to_string(), doc! { "name": "Kim" });

        assert!(!user.is_admin());
        assert_eq!(user.badge.as_deref(), Some("Bronze"));

        let document = bson::to_document(&user).unwrap();
        assert_eq!(document.get_str("badge").unwrap(), "Bronze");
        assert_eq!(document.get_str("name").unwrap(), "Kim");
        assert!(!document.contains_key("role"));
    }

    #[test]
    fn test_admin_detection() {
        let user: User = bson::from_document(doc! {
            "email": "boss@example.com",
            "role": "admin",
            "badge": "",
        })
        .unwrap();

        assert!(user.is_admin());
        assert_eq!(user.badge.as_deref(), Some(""));

        let user: User = bson::from_document(doc! { "email": "x@example.com", "role": "Admin" }).unwrap();
        assert!(!user.is_admin());
    }
}
