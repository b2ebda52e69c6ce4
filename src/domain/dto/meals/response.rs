use serde::Serialize;
use serde_json::{Map, Value};
use crate::domain::entities::{Meal, MealReviewRow, Review, UpcomingMeal};
use crate::utils::bson_utils::document_to_json_map;

/// 식단 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct MealResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub likes: i64,
    pub reviews: Vec<ReviewResponse>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<Meal> for MealResponse {
    fn from(meal: Meal) -> Self {
        let Meal { id, title, likes, reviews, details } = meal;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            likes,
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
            details: document_to_json_map(details),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            email: review.email,
            user: review.user,
            comment: review.comment,
            details: document_to_json_map(review.details),
        }
    }
}

/// 출시 예정 식단 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingMealResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub likes: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<UpcomingMeal> for UpcomingMealResponse {
    fn from(meal: UpcomingMeal) -> Self {
        Self {
            id: meal.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: meal.title,
            likes: meal.likes,
            details: document_to_json_map(meal.details),
        }
    }
}

/// 리뷰 목록 페이지의 한 행
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummaryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub likes: i64,
    pub review_user: Option<String>,
    pub review_comment: Option<String>,
}

impl From<MealReviewRow> for ReviewSummaryResponse {
    fn from(row: MealReviewRow) -> Self {
        Self {
            id: row.id.to_hex(),
            title: row.title,
            likes: row.likes,
            review_user: row.review_user,
            review_comment: row.review_comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_meal_response_flattens_details() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let mut meal = Meal::new(Some("Naengmyeon".to_string()), doc! { "price": 10.5 });
        meal.id = Some(oid);
        meal.likes = 3;
        meal.reviews.push(Review::new("a@b.com".into(), "Ann".into(), "Cold!".into()));

        let body = serde_json::to_value(MealResponse::from(meal)).unwrap();

        assert_eq!(body["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(body["title"], "Naengmyeon");
        assert_eq!(body["likes"], 3);
        assert_eq!(body["price"], 10.5);
        assert_eq!(body["reviews"][0]["comment"], "Cold!");
    }

    #[test]
    fn test_review_summary_uses_camel_case() {
        let row = MealReviewRow {
            id: ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap(),
            title: Some("Bibimbap".to_string()),
            likes: 7,
            review_user: Some("Kim".to_string()),
            review_comment: Some("Great".to_string()),
        };

        let body = serde_json::to_value(ReviewSummaryResponse::from(row)).unwrap();

        assert_eq!(body["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(body["reviewUser"], "Kim");
        assert_eq!(body["reviewComment"], "Great");
    }
}
