//! # 리뷰 서비스
//!
//! 리뷰는 `meals.reviews` 배열의 내장 문서입니다. 추가는 `$push`, 수정은 위치 연산자
//! `reviews.$`, 삭제는 `$pull`로 처리하며 실제로 바뀐 문서가 없으면 404를 반환합니다.

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{
    ApiResponse, MealResponse, NewReviewRequest, ReviewCommentDeleteRequest, ReviewDeleteRequest,
    ReviewPageQuery, ReviewSummaryResponse, ReviewUpdateRequest,
};
use crate::domain::entities::Review;
use crate::repositories::MealRepository;
use crate::utils::bson_utils::parse_object_id;
use crate::utils::string_utils::validate_required_string;

static REVIEW_SERVICE_INSTANCE: OnceCell<Arc<ReviewService>> = OnceCell::new();

pub struct ReviewService {
    meal_repo: Arc<MealRepository>,
}

impl ReviewService {
    pub fn instance() -> Arc<Self> {
        REVIEW_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            meal_repo: ServiceLocator::get::<MealRepository>(),
        }
    }

    /// 전체 리뷰를 식단 좋아요 순으로 페이지 단위 조회
    pub async fn review_page(&self, query: &ReviewPageQuery) -> Result<Vec<ReviewSummaryResponse>, AppError> {
        let rows = self.meal_repo.review_page(query.skip(), query.limit).await?;
        Ok(rows.into_iter().map(ReviewSummaryResponse::from).collect())
    }

    pub async fn meals_reviewed_by(&self, email: &str) -> Result<Vec<MealResponse>, AppError> {
        let email = validate_required_string(email, "email")?;
        let meals = self.meal_repo.find_reviewed_by(&email).await?;
        Ok(meals.into_iter().map(MealResponse::from).collect())
    }

    pub async fn add_review(&self, request: NewReviewRequest) -> Result<ApiResponse, AppError> {
        let meal_id = parse_object_id(&request.meal_id)?;
        let review = Review::new(request.email, request.user, request.comment);

        if self.meal_repo.push_review(&meal_id, &review).await? {
            Ok(ApiResponse::ok("Review added successfully."))
        } else {
            Err(AppError::NotFound("Meal not found.".to_string()))
        }
    }

    pub async fn update_review(&self, meal_id: &str, request: ReviewUpdateRequest) -> Result<ApiResponse, AppError> {
        let meal_id = parse_object_id(meal_id)?;

        let modified = self.meal_repo
            .update_review(&meal_id, &request.email, request.user.as_deref(), request.comment.as_deref())
            .await?;

        if modified {
            Ok(ApiResponse::ok("Review updated successfully."))
        } else {
            Err(AppError::NotFound("Review not found.".to_string()))
        }
    }

    pub async fn delete_review_by_email(&self, meal_id: &str, request: ReviewDeleteRequest) -> Result<ApiResponse, AppError> {
        let meal_id = parse_object_id(meal_id)?;

        if self.meal_repo.pull_reviews_by_email(&meal_id, &request.email).await? {
            Ok(ApiResponse::ok("Review deleted successfully."))
        } else {
            Err(AppError::NotFound("Review not found.".to_string()))
        }
    }

    pub async fn delete_review_by_comment(
        &self,
        meal_id: &str,
        request: ReviewCommentDeleteRequest,
    ) -> Result<ApiResponse, AppError> {
        let meal_id = parse_object_id(meal_id)?;

        if self.meal_repo.pull_reviews_by_comment(&meal_id, &request.comment).await? {
            Ok(ApiResponse::ok("Review deleted successfully."))
        } else {
            Err(AppError::NotFound("Review not found.".to_string()))
        }
    }
}

fn review_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(ReviewService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "review_service",
        constructor: review_service_constructor,
    }
}
