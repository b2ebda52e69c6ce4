//! # BSON ↔ JSON 변환 유틸리티
//!
//! 클라이언트가 보낸 임의의 JSON 객체를 MongoDB 문서로 저장하고,
//! 저장된 문서를 다시 프론트엔드가 다루기 쉬운 JSON으로 돌려줍니다.
//!
//! - `ObjectId` → 24자리 16진수 문자열
//! - `DateTime` → RFC 3339 문자열
//! - 그 외 → relaxed Extended JSON

use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use crate::core::errors::AppError;

/// 경로 파라미터의 ObjectId 문자열을 파싱합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("Invalid id format: {}", id)))
}

/// JSON 객체를 MongoDB 문서로 변환합니다. 클라이언트가 보낸 `_id`는 버립니다.
pub fn json_to_document(object: Map<String, Value>) -> Result<Document, AppError> {
    let mut document = bson::to_document(&object)
        .map_err(|e| AppError::ValidationError(format!("Unsupported document value: {}", e)))?;
    document.remove("_id");
    Ok(document)
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(dt.timestamp_millis())),
        Bson::Document(doc) => Value::Object(document_to_json_map(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json_map(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

/// 숫자 필드를 1 올리는 업데이트 파이프라인
///
/// `$inc`는 문자열로 저장된 숫자에서 실패하므로 먼저 `long`으로 변환합니다.
/// 변환할 수 없거나 없는 값은 0으로 보고 1이 됩니다.
pub fn increment_count_pipeline(field: &str) -> Vec<Document> {
    let current = doc! {
        "$convert": {
            "input": format!("${}", field),
            "to": "long",
            "onError": 0_i64,
            "onNull": 0_i64,
        }
    };

    let mut set = Document::new();
    set.insert(field, doc! { "$add": [current, 1_i64] });

    vec![doc! { "$set": set }]
}

/// 좋아요 수처럼 클라이언트가 기록한 숫자 필드를 관대하게 읽습니다.
///
/// 정수, 실수, 숫자 문자열을 모두 허용하고 `null`이나 해석할 수 없는 값은 0으로 봅니다.
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Int(n)) => n,
        Some(Count::Float(f)) if f.is_finite() => f as i64,
        Some(Count::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
