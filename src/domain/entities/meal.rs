//! Meal Entity
//!
//! `meals` 컬렉션의 문서입니다. 서비스가 직접 다루는 필드(`title`, `likes`, `reviews`)
//! 외의 값(가격, 재료, 이미지 등)은 `details`에 그대로 보존됩니다.

use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};
use crate::utils::bson_utils::deserialize_count;
use crate::utils::string_utils::deserialize_lenient_string;

pub const MEALS_COLLECTION: &str = "meals";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: i64,
    #[serde(default, deserialize_with = "deserialize_reviews")]
    pub reviews: Vec<Review>,
    /// 클라이언트가 보낸 나머지 필드
    #[serde(flatten)]
    pub details: Document,
}

impl Meal {
    pub fn new(title: Option<String>, details: Document) -> Self {
        Self {
            id: None,
            title,
            likes: 0,
            reviews: Vec::new(),
            details,
        }
    }
}

/// `reviews` 값에서 리뷰로 읽을 수 있는 항목만 남깁니다.
///
/// 배열이 아니면 빈 목록이고, 문서가 아닌 항목은 버립니다.
pub fn reviews_from_bson(value: Bson) -> Vec<Review> {
    match value {
        Bson::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Bson::Document(document) => bson::from_document::<Review>(document).ok(),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn deserialize_reviews<'de, D>(deserializer: D) -> Result<Vec<Review>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Bson>::deserialize(deserializer)?
        .map(reviews_from_bson)
        .unwrap_or_default())
}

/// 식단 문서에 내장된 리뷰
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub details: Document,
}

impl Review {
    pub fn new(email: String, user: String, comment: String) -> Self {
        Self {
            email: Some(email),
            user: Some(user),
            comment: Some(comment),
            details: Document::new(),
        }
    }

    /// `$push`에 사용할 BSON 문서
    pub fn to_document(&self) -> Document {
        let mut document = doc! {};
        if let Some(email) = &self.email {
            document.insert("email", email);
        }
        if let Some(user) = &self.user {
            document.insert("user", user);
        }
        if let Some(comment) = &self.comment {
            document.insert("comment", comment);
        }
        document.extend(self.details.clone());
        document
    }
}

/// 리뷰 목록 집계(`$unwind` + `$project`)의 한 행
#[derive(Debug, Clone, Deserialize)]
pub struct MealReviewRow {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: i64,
    #[serde(rename = "reviewUser", default, deserialize_with = "deserialize_lenient_string")]
    pub review_user: Option<String>,
    #[serde(rename = "reviewComment", default, deserialize_with = "deserialize_lenient_string")]
    pub review_comment: Option<String>,
}
