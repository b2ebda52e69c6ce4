//! 리뷰 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

pub const DEFAULT_REVIEW_PAGE_SIZE: u64 = 5;
pub const MAX_REVIEW_PAGE_SIZE: u64 = 100;

/// `POST /reviews/byUser`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewRequest {
    #[validate(length(min = 1, message = "mealId is required"))]
    pub meal_id: String,

    #[validate(length(min = 1, max = 100, message = "user must be 1-100 characters"))]
    pub user: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 2000, message = "comment must be 1-2000 characters"))]
    pub comment: String,
}

/// `PATCH /meals/review/{id}`. `user`와 `comment` 중 보낸 값만 바꿉니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct ReviewUpdateRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "user must be at most 100 characters"))]
    pub user: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 2000, message = "comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

fn validate_has_changes(req: &ReviewUpdateRequest) -> Result<(), ValidationError> {
    if req.user.is_none() && req.comment.is_none() {
        return Err(ValidationError::new("no_changes")
            .with_message("Either user or comment must be provided".into()));
    }
    Ok(())
}

/// `DELETE /meals/review/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewDeleteRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// `DELETE /meals/reviews/{mealId}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewCommentDeleteRequest {
    #[validate(length(min = 1, message = "comment is required"))]
    pub comment: String,
}

/// `GET /meals/reviews?page=&limit=`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewPageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_REVIEW_PAGE_SIZE, message = "limit must be between 1 and 100"))]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_REVIEW_PAGE_SIZE
}

impl Default for ReviewPageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl ReviewPageQuery {
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}
