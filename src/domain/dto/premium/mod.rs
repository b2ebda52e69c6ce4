//! 프리미엄 패키지 DTO

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::domain::entities::PremiumPackage;
use crate::utils::bson_utils::document_to_json_map;

/// Redis 캐시에도 이 형태 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumPackageResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<PremiumPackage> for PremiumPackageResponse {
    fn from(package: PremiumPackage) -> Self {
        Self {
            id: package.id.map(|id| id.to_hex()).unwrap_or_default(),
            details: document_to_json_map(package.details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_premium_response_roundtrips_through_cache_json() {
        let package = PremiumPackage {
            id: Some(ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap()),
            details: doc! { "name": "Silver", "price": 19.99 },
        };

        let response = PremiumPackageResponse::from(package);
        let cached = serde_json::to_string(&response).unwrap();
        let restored: PremiumPackageResponse = serde_json::from_str(&cached).unwrap();

        assert_eq!(restored, response);
        assert_eq!(restored.details["name"], "Silver");
    }
}
