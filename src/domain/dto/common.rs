//! 여러 리소스가 공유하는 응답 DTO

use mongodb::results::UpdateResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::bson_utils::bson_to_json;

/// 쓰기 작업 결과 응답
///
/// ```json
/// { "success": true, "message": "Meal added successfully.", "insertedId": "65a1..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            inserted_id: None,
            likes: None,
        }
    }

    /// 요청은 정상 처리됐지만 비즈니스 규칙상 거절된 경우 (HTTP 200)
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::ok(message)
        }
    }

    pub fn with_inserted_id(mut self, inserted_id: impl Into<String>) -> Self {
        self.inserted_id = Some(inserted_id.into());
        self
    }

    pub fn with_likes(mut self, likes: i64) -> Self {
        self.likes = Some(likes);
        self
    }
}

/// 회원가입 응답. 중복 가입이면 `insertedId`가 `null`로 내려갑니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    pub inserted_id: Option<String>,
}

/// MongoDB `updateOne` 결과를 그대로 노출하는 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Value>,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(bson_to_json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::ok("Meal deleted successfully.")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "Meal deleted successfully." }));

        let body = serde_json::to_value(
            ApiResponse::ok("Meal added successfully.").with_inserted_id("65a1f0c2e4b0a1b2c3d4e5f6"),
        )
        .unwrap();
        assert_eq!(body["insertedId"], "65a1f0c2e4b0a1b2c3d4e5f6");

        let body = serde_json::to_value(ApiResponse::ok("Like added successfully.").with_likes(11)).unwrap();
        assert_eq!(body["likes"], 11);
    }

    #[test]
    fn test_rejected_response() {
        let response = ApiResponse::rejected("Meal is already served.");
        assert!(!response.success);
        assert_eq!(response.message, "Meal is already served.");
    }

    #[test]
    fn test_registration_response_keeps_null_id() {
        let body = serde_json::to_value(RegistrationResponse {
            success: false,
            message: "user already exists".to_string(),
            inserted_id: None,
        })
        .unwrap();

        assert_eq!(body, json!({ "success": false, "message": "user already exists", "insertedId": null }));
    }
}
