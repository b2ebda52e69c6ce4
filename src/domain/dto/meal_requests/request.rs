//! 식단 요청(주문) DTO

use mongodb::bson::{self, Bson};
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};
use crate::core::errors::AppError;
use crate::domain::entities::MealRequest;
use crate::utils::bson_utils::json_to_document;

/// `POST /meals/request-multiple`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MealRequestDraft {
    #[validate(length(min = 1, message = "At least one meal must be requested"))]
    pub meals: Vec<Value>,

    #[serde(rename = "userData")]
    #[validate(custom(function = "validate_user_data"))]
    pub user_data: Map<String, Value>,
}

/// 요청자 조회가 `userData.email`로 이루어지므로 이메일 문자열이 있어야 합니다.
fn validate_user_data(user_data: &Map<String, Value>) -> Result<(), ValidationError> {
    match user_data.get("email").and_then(Value::as_str) {
        Some(email) if !email.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("missing_email")
            .with_message("userData.email is required".into())),
    }
}

impl MealRequestDraft {
    pub fn into_meal_request(self) -> Result<MealRequest, AppError> {
        let meals = self
            .meals
            .into_iter()
            .map(|meal| {
                bson::to_bson(&meal)
                    .map_err(|e| AppError::ValidationError(format!("Unsupported meal value: {}", e)))
            })
            .collect::<Result<Vec<Bson>, AppError>>()?;

        let user_data = json_to_document(self.user_data)?;
        Ok(MealRequest::new(meals, user_data, Default::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RequestStatus;
    use serde_json::json;

    #[test]
    fn test_draft_into_pending_request() {
        let draft: MealRequestDraft = serde_json::from_value(json!({
            "meals": [ { "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "title": "Soup" }, "65a1f0c2e4b0a1b2c3d4e5f7" ],
            "userData": { "email": "choi@example.com", "name": "Choi" }
        }))
        .unwrap();
        assert!(draft.validate().is_ok());

        let request = draft.into_meal_request().unwrap();

        assert_eq!(request.meals.len(), 2);
        assert_eq!(request.requester_email(), Some("choi@example.com"));
        assert_eq!(request.request_status, RequestStatus::Pending);
    }

    #[test]
    fn test_draft_validation() {
        let no_meals: MealRequestDraft = serde_json::from_value(json!({
            "meals": [],
            "userData": { "email": "choi@example.com" }
        }))
        .unwrap();
        assert!(no_meals.validate().is_err());

        let no_email: MealRequestDraft = serde_json::from_value(json!({
            "meals": [ "65a1f0c2e4b0a1b2c3d4e5f6" ],
            "userData": { "name": "Choi" }
        }))
        .unwrap();
        assert!(no_email.validate().is_err());
    }
}
