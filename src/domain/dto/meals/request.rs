//! 식단 요청 DTO
//!
//! 식단 문서는 스키마가 느슨하므로 알려진 필드만 검증하고 나머지는 그대로 저장합니다.

use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::entities::{Meal, Review, UpcomingMeal};
use crate::utils::bson_utils::{deserialize_count, json_to_document};
use crate::utils::string_utils::deserialize_optional_string;

/// 새 식단(또는 출시 예정 식단) 등록 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MealDraft {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "title must be at most 200 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_count")]
    #[validate(range(min = 0, message = "likes cannot be negative"))]
    pub likes: i64,

    #[serde(default)]
    pub reviews: Vec<Review>,

    /// 가격, 재료, 이미지 등 나머지 필드
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MealDraft {
    fn split(self) -> Result<(Option<String>, i64, Vec<Review>, Document), AppError> {
        let details = json_to_document(self.fields)?;
        Ok((self.title, self.likes, self.reviews, details))
    }

    pub fn into_meal(self) -> Result<Meal, AppError> {
        let (title, likes, reviews, details) = self.split()?;
        let mut meal = Meal::new(title, details);
        meal.likes = likes;
        meal.reviews = reviews;
        Ok(meal)
    }

    /// 출시 예정 식단에는 리뷰 필드가 없으므로, 보낸 리뷰는 부가 필드로 보존합니다.
    pub fn into_upcoming_meal(self) -> Result<UpcomingMeal, AppError> {
        let (title, likes, reviews, mut details) = self.split()?;
        if !reviews.is_empty() {
            let reviews: Vec<Document> = reviews.iter().map(Review::to_document).collect();
            details.insert("reviews", reviews);
        }
        let mut meal = UpcomingMeal::new(title, details);
        meal.likes = likes;
        Ok(meal)
    }
}

/// 식단 수정 요청. 보낸 필드만 `$set` 합니다.
///
/// 나머지 필드는 자유롭지만 서비스가 읽는 `title`, `likes`, `reviews`는 형식을 검사합니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MealUpdateRequest {
    pub fields: Map<String, Value>,
}

impl MealUpdateRequest {
    pub fn into_set_document(self) -> Result<Document, AppError> {
        check_known_fields(&self.fields)?;
        let document = json_to_document(self.fields)?;
        if document.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        Ok(document)
    }
}

fn invalid(message: &str) -> Result<(), AppError> {
    Err(AppError::ValidationError(message.to_string()))
}

fn check_known_fields(fields: &Map<String, Value>) -> Result<(), AppError> {
    if fields.keys().any(|key| key.starts_with('$')) {
        return invalid("Field names cannot start with '$'");
    }

    if let Some(title) = fields.get("title") {
        if !(title.is_string() || title.is_null()) {
            return invalid("title must be a string");
        }
    }

    if let Some(likes) = fields.get("likes") {
        if !likes.as_i64().is_some_and(|n| n >= 0) {
            return invalid("likes must be a non-negative integer");
        }
    }

    if let Some(reviews) = fields.get("reviews") {
        let well_formed = reviews
            .as_array()
            .is_some_and(|items| items.iter().all(is_review_object));
        if !well_formed {
            return invalid("reviews must be an array of review objects");
        }
    }

    Ok(())
}

fn is_review_object(item: &Value) -> bool {
    item.as_object().is_some_and(|review| {
        ["email", "user", "comment"]
            .iter()
            .all(|key| review.get(*key).is_none_or(|value| value.is_string() || value.is_null()))
    })
}
