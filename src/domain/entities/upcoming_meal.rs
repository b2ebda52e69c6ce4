//! Upcoming Meal Entity
//!
//! 출시 전 스테이징 컬렉션(`upcomingMeals`)의 식단입니다. 좋아요가 기준치에
//! 도달하면 같은 `_id`로 `meals` 컬렉션에 게시됩니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use crate::domain::entities::meal::{reviews_from_bson, Meal};
use crate::utils::bson_utils::deserialize_count;
use crate::utils::string_utils::deserialize_lenient_string;

pub const UPCOMING_MEALS_COLLECTION: &str = "upcomingMeals";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpcomingMeal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "deserialize_lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: i64,
    #[serde(flatten)]
    pub details: Document,
}

impl UpcomingMeal {
    pub fn new(title: Option<String>, details: Document) -> Self {
        Self {
            id: None,
            title,
            likes: 0,
            details,
        }
    }

    pub fn can_publish(&self, threshold: i64) -> bool {
        self.likes >= threshold
    }
}

/// 게시할 때 스테이징 문서를 그대로 옮깁니다.
///
/// 스테이징 문서에 `reviews` 배열이 있으면 리뷰로 읽고, 형식이 맞지 않는 항목은 버립니다.
impl From<UpcomingMeal> for Meal {
    fn from(upcoming: UpcomingMeal) -> Self {
        let UpcomingMeal { id, title, likes, mut details } = upcoming;

        let reviews = details
            .remove("reviews")
            .map(reviews_from_bson)
            .unwrap_or_default();

        Meal {
            id,
            title,
            likes,
            reviews,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_publish_threshold() {
        let mut meal = UpcomingMeal::new(Some("Tteokbokki".to_string()), Document::new());
        assert!(!meal.can_publish(10));

        meal.likes = 10;
        assert!(meal.can_publish(10));
    }

    #[test]
    fn test_into_meal_keeps_id_and_fields() {
        let oid = ObjectId::new();
        let upcoming: UpcomingMeal = bson::from_document(doc! {
            "_id": oid,
            "title": "Japchae",
            "likes": "11",
            "price": 8,
            "reviews": [ { "email": "a@b.com", "comment": "Yum" }, "garbage" ],
        })
        .unwrap();

        let meal = Meal::from(upcoming);

        assert_eq!(meal.id, Some(oid));
        assert_eq!(meal.title.as_deref(), Some("Japchae"));
        assert_eq!(meal.likes, 11);
        assert_eq!(meal.reviews.len(), 1);
        assert_eq!(meal.details.get_i32("price").unwrap(), 8);
        assert!(!meal.details.contains_key("reviews"));
    }
}
