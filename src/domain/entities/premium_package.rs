//! Premium Package Entity
//!
//! 읽기 전용 카탈로그입니다. 이름과 가격 등은 운영자가 직접 입력하므로
//! 스키마를 강제하지 않습니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

pub const PREMIUM_COLLECTION: &str = "premium";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PremiumPackage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub details: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_package_roundtrip_keeps_fields() {
        let oid = ObjectId::new();
        let package: PremiumPackage = bson::from_document(doc! {
            "_id": oid,
            "name": "Gold",
            "price": 29.99,
        })
        .unwrap();

        assert_eq!(package.id, Some(oid));
        assert_eq!(package.details.get_str("name").unwrap(), "Gold");
        assert_eq!(package.details.get_f64("price").unwrap(), 29.99);
    }
}
