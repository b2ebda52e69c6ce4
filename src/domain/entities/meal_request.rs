//! Meal Request Entity
//!
//! 사용자가 한 번에 여러 식단을 요청한 기록(`requestedMeals`)입니다.
//! `meals` 배열과 `userData` 객체는 클라이언트가 보낸 그대로 저장합니다.

use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use crate::domain::models::request_status::{deserialize_request_status, RequestStatus};

pub const MEAL_REQUESTS_COLLECTION: &str = "requestedMeals";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub meals: Vec<Bson>,
    #[serde(rename = "userData", default)]
    pub user_data: Document,
    #[serde(rename = "requestStatus", default, deserialize_with = "deserialize_request_status")]
    pub request_status: RequestStatus,
    #[serde(flatten)]
    pub details: Document,
}

impl MealRequest {
    pub fn new(meals: Vec<Bson>, user_data: Document, details: Document) -> Self {
        Self {
            id: None,
            meals,
            user_data,
            request_status: RequestStatus::Pending,
            details,
        }
    }

    pub fn requester_email(&self) -> Option<&str> {
        self.user_data.get_str("email").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_new_request_is_pending() {
        let request = MealRequest::new(
            vec![Bson::String("65a1f0c2e4b0a1b2c3d4e5f6".to_string())],
            doc! { "email": "lee@example.com", "name": "Lee" },
            Document::new(),
        );

        assert_eq!(request.requester_email(), Some("lee@example.com"));

        let document = bson::to_document(&request).unwrap();
        assert_eq!(document.get_str("requestStatus").unwrap(), "Pending");
        assert_eq!(document.get_document("userData").unwrap().get_str("name").unwrap(), "Lee");
    }

    #[test]
    fn test_status_defaults_to_pending_when_missing() {
        let request: MealRequest = bson::from_document(doc! {
            "meals": [ { "title": "Soup" } ],
            "userData": { "email": "a@b.com" },
            "note": "no onions",
        })
        .unwrap();

        assert_eq!(request.request_status, RequestStatus::Pending);
        assert_eq!(request.meals.len(), 1);
        assert_eq!(request.details.get_str("note").unwrap(), "no onions");
    }

    #[test]
    fn test_unrecognized_status_does_not_break_reads() {
        let request: MealRequest = bson::from_document(doc! {
            "meals": [],
            "userData": { "email": "a@b.com" },
            "requestStatus": "Canceled",
        })
        .unwrap();
        assert_eq!(request.request_status, RequestStatus::Other("Canceled".to_string()));

        let document = bson::to_document(&request).unwrap();
        assert_eq!(document.get_str("requestStatus").unwrap(), "Canceled");

        let request: MealRequest = bson::from_document(doc! { "requestStatus": 3_i32 }).unwrap();
        assert_eq!(request.request_status, RequestStatus::Pending);
    }
}
