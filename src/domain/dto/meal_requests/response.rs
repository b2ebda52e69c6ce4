use serde::Serialize;
use serde_json::{Map, Value};
use crate::domain::entities::MealRequest;
use crate::domain::models::RequestStatus;
use crate::utils::bson_utils::{bson_to_json, document_to_json_map};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRequestResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub meals: Vec<Value>,
    pub user_data: Map<String, Value>,
    pub request_status: RequestStatus,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<MealRequest> for MealRequestResponse {
    fn from(request: MealRequest) -> Self {
        Self {
            id: request.id.map(|id| id.to_hex()).unwrap_or_default(),
            meals: request.meals.into_iter().map(bson_to_json).collect(),
            user_data: document_to_json_map(request.user_data),
            request_status: request.request_status,
            details: document_to_json_map(request.details),
        }
    }
}
